use crate::domain::Listing;
use crate::templates::components::{format_area, format_price};
use maud::{html, Markup};

pub fn land_card(land: &Listing) -> Markup {
    let href = format!("/listings/{}", land.id);

    html! {
        article class="card land-card" {
            a href=(href) class="land-card-photo" {
                @if let Some(photo) = land.cover_photo() {
                    img src=(photo) alt=(format!("Photo of {}", land.name)) loading="lazy";
                }
            }
            div class="card-body" {
                h3 { a href=(href) { (land.name) } }
                ul class="facts" {
                    li { (land.location) }
                    li { (format_area(land.area)) " acres" }
                    li { (format_price(land.price)) }
                }
                a href=(href) class="button" { "View Details" }
            }
        }
    }
}
