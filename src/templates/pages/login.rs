use crate::templates::layouts::{site_layout, PageMeta};
use maud::{html, Markup};

pub fn login_page() -> Markup {
    site_layout(
        PageMeta::new("Admin sign in | RR Group", "/admin/login"),
        html! {
            main class="container narrow" {
                h1 { "Admin sign in" }
                p class="lead" {
                    "Enter your email and we’ll send you a secure sign-in link."
                }

                div id="auth-result" {
                    form
                        method="post"
                        action="/admin/login"
                        hx-post="/admin/login"
                        hx-target="#auth-result"
                        hx-swap="innerHTML"
                        hx-disabled-elt="button"
                        class="email-cta"
                    {
                        label class="sr-only" for="email" { "Email address" }
                        input
                            type="email"
                            id="email"
                            name="email"
                            placeholder="you@rrgroup.com"
                            autocomplete="email"
                            required;

                        button type="submit" { "Send sign-in link" }
                    }
                }
            }
        },
    )
}
