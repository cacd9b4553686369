use crate::templates::layouts::site::{head, PageMeta};
use maud::{html, Markup, DOCTYPE};

const ADMIN_LINKS: [(&str, &str); 3] = [
    ("/admin/dashboard", "Dashboard"),
    ("/admin/upload", "Upload Land"),
    ("/admin/reports", "Reports"),
];

/// CRM chrome: sidebar nav, signed-in email and a logout button.
pub fn admin_layout(title: &str, path: &str, admin_email: &str, content: Markup) -> Markup {
    let page_title = format!("{title} | RR Group Admin");
    let meta = PageMeta::new(&page_title, path);

    html! {
        (DOCTYPE)
        html lang="en" {
            (head(&meta))
            body class="admin" {
                aside class="admin-sidebar" {
                    a href="/" class="brand" { "RR GROUP" }
                    nav {
                        ul {
                            @for (href, label) in ADMIN_LINKS {
                                li {
                                    a href=(href) class=[(path == href).then_some("active")] { (label) }
                                }
                            }
                        }
                    }
                    div class="admin-user" {
                        p class="muted" { (admin_email) }
                        form method="post" action="/admin/logout" {
                            button type="submit" class="secondary" { "Log out" }
                        }
                    }
                }
                main class="admin-main" {
                    header class="admin-header" { h1 { (title) } }
                    (content)
                }
            }
        }
    }
}
