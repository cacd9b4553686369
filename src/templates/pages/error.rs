use crate::templates::layouts::{site_layout, PageMeta};
use maud::{html, Markup};

pub fn error_page(status: u16, message: &str) -> Markup {
    let title = format!("Error {status} | RR Group");
    site_layout(
        PageMeta::new(&title, ""),
        html! {
            main class="container narrow" {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/" { "← Back to home" } }
            }
        },
    )
}
