use maud::{html, Markup, DOCTYPE};

const NAV_LINKS: [(&str, &str); 5] = [
    ("/", "Home"),
    ("/listings", "Land Listings"),
    ("/recommendations", "AI Recommendations"),
    ("/about", "About Us"),
    ("/contact", "Contact"),
];

pub struct PageMeta<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    /// Highlights the matching nav link.
    pub path: &'a str,
    pub og_image: Option<&'a str>,
}

impl<'a> PageMeta<'a> {
    pub fn new(title: &'a str, path: &'a str) -> Self {
        Self {
            title,
            description: None,
            path,
            og_image: None,
        }
    }

    pub fn description(mut self, description: &'a str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn og_image(mut self, url: Option<&'a str>) -> Self {
        self.og_image = url;
        self
    }
}

pub fn head(meta: &PageMeta) -> Markup {
    html! {
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            title { (meta.title) }
            @if let Some(description) = meta.description {
                meta name="description" content=(description);
                meta property="og:description" content=(description);
            }
            meta property="og:title" content=(meta.title);
            @if let Some(image) = meta.og_image {
                meta property="og:image" content=(image);
            }
            link rel="stylesheet" href="/static/main.css";
            script src="https://unpkg.com/htmx.org@1.9.12" defer {};
        }
    }
}

pub fn site_layout(meta: PageMeta, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            (head(&meta))
            body {
                header class="site-header" {
                    a href="/" class="brand" {
                        svg
                            xmlns="http://www.w3.org/2000/svg"
                            width="24"
                            height="24"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="currentColor"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                        {
                            path d="m8 3 4 8 5-5 5 15H2L8 3z" {}
                        }
                        span { "RR GROUP" }
                    }
                    nav {
                        ul {
                            @for (href, label) in NAV_LINKS {
                                li {
                                    a href=(href) class=[(meta.path == href).then_some("active")] { (label) }
                                }
                            }
                        }
                    }
                }
                (content)
                footer class="site-footer" {
                    p { "© RR Group. All rights reserved." }
                }
            }
        }
    }
}
