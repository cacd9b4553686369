use crate::domain::Listing;
use crate::templates::components::land_card;
use crate::templates::layouts::{site_layout, PageMeta};
use maud::{html, Markup};

pub fn home_page(featured: &[Listing]) -> Markup {
    site_layout(
        PageMeta::new("RR Group | Exclusive Land Listings", "/")
            .description("Discover exclusive land properties with RR Group. Your vision, our foundation."),
        html! {
            section class="hero" {
                h1 { "Find Your " span class="accent" { "Perfect Land" } }
                p class="lead" {
                    "Discover exclusive land properties with RR Group. Your vision, our foundation."
                }
                div class="actions" {
                    a href="/listings" class="button" { "Explore Listings" }
                    a href="/recommendations" class="button secondary" { "Get AI Recommendation" }
                }
            }

            section class="container" {
                h2 class="section-title" { "Featured Properties" }
                p class="muted center" {
                    "A handpicked selection of our finest land offerings. Explore premier locations and unparalleled opportunities."
                }
                div class="grid" {
                    @for land in featured {
                        (land_card(land))
                    }
                }
            }
        },
    )
}
