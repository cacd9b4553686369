use crate::templates::layouts::{site_layout, PageMeta};
use maud::{html, Markup};

/// Swapped in by htmx in place of the login form. Worded the same whether
/// or not the address may sign in.
pub fn check_email_content(email: &str) -> Markup {
    html! {
        div class="notice success" {
            h3 { "Check your email" }
            p {
                "If " strong { (email) } " has admin access, a sign-in link is on its way."
            }
            p class="muted small" { "The link expires in 15 minutes." }
            a href="/admin/login" { "Try with a different email" }
        }
    }
}

/// Same message as a full page, for browsers without htmx.
pub fn check_email_page(email: &str) -> Markup {
    site_layout(
        PageMeta::new("Check your email | RR Group", "/admin/login"),
        html! {
            main class="container narrow" {
                (check_email_content(email))
            }
        },
    )
}
