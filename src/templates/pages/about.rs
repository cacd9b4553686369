use crate::templates::layouts::{site_layout, PageMeta};
use maud::{html, Markup};

const SERVICES: [&str; 6] = [
    "Land Acquisition & Sales",
    "Property Valuation",
    "Development Consulting",
    "AI-Powered Market Analysis",
    "Exclusive Off-Market Deals",
    "Personalized Client Advisory",
];

pub fn about_page() -> Markup {
    site_layout(
        PageMeta::new("About Us | RR Group", "/about")
            .description("Pioneering the future of real estate by connecting discerning clients with exclusive land opportunities."),
        html! {
            main class="container" {
                h1 class="section-title" { "About RR Group" }
                p class="lead center" {
                    "Pioneering the future of real estate by connecting discerning clients with exclusive land opportunities."
                }

                section class="two-col" {
                    img src="https://placehold.co/800x800.png" alt="RR Group office building";
                    div {
                        h2 { "Our Mission" }
                        p {
                            "At RR Group, our mission is to redefine the land acquisition experience. "
                            "We combine deep market expertise with a client-centric approach to unlock value in every transaction."
                        }
                        p {
                            "Our team is committed to a seamless and transparent process from discovery to closing. "
                            "We are not just agents; we are partners in building your future."
                        }
                    }
                }

                section {
                    h2 class="section-title" { "Our Services" }
                    p class="muted center" { "Comprehensive solutions for all your land-related needs." }
                    ul class="grid services" {
                        @for service in SERVICES {
                            li class="card" { (service) }
                        }
                    }
                }
            }
        },
    )
}
