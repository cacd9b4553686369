use crate::domain::enquiry::ContactForm;
use crate::domain::validation::FieldErrors;
use crate::templates::components::field_error;
use crate::templates::layouts::{site_layout, PageMeta};
use maud::{html, Markup};

/// `body` is either the form or the thank-you note.
pub fn contact_page(body: Markup) -> Markup {
    site_layout(
        PageMeta::new("Contact Us | RR Group", "/contact")
            .description("Have a question or a project in mind? We'd love to hear from you."),
        html! {
            main class="container" {
                h1 class="section-title" { "Contact Us" }
                p class="lead center" { "Have a question or a project in mind? We'd love to hear from you." }

                div class="two-col" {
                    div class="contact-details" {
                        div class="card" { h3 { "Our Office" } p class="muted" { "123 Luxury Lane, Beverly Hills, CA 90210" } }
                        div class="card" { h3 { "Email Us" } p class="muted" { "contact@rrgroup.com" } }
                        div class="card" { h3 { "Call Us" } p class="muted" { "(310) 555-0101" } }
                    }
                    div class="card" {
                        h2 { "Send a Message" }
                        (body)
                    }
                }
            }
        },
    )
}

pub fn contact_form(form: &ContactForm, errors: &FieldErrors) -> Markup {
    html! {
        form id="contact-form" method="post" action="/contact"
            hx-post="/contact" hx-target="this" hx-swap="outerHTML" hx-disabled-elt="button"
        {
            label for="name" { "Full Name" }
            input type="text" id="name" name="name" value=(form.name) placeholder="John Doe";
            (field_error(errors, "name"))

            label for="email" { "Email Address" }
            input type="email" id="email" name="email" value=(form.email) placeholder="john@example.com";
            (field_error(errors, "email"))

            label for="subject" { "Subject" }
            input type="text" id="subject" name="subject" value=(form.subject) placeholder="Inquiry about...";
            (field_error(errors, "subject"))

            label for="message" { "Message" }
            textarea id="message" name="message" rows="5" placeholder="Your message..." { (form.message) }
            (field_error(errors, "message"))

            button type="submit" { "Send Message" }
        }
    }
}

pub fn contact_thanks() -> Markup {
    html! {
        div id="contact-form" class="notice success" {
            h3 { "Message Sent!" }
            p { "Thank you for contacting us. We will get back to you shortly." }
        }
    }
}
