use crate::domain::Listing;
use crate::templates::components::{format_area, format_price};
use crate::templates::layouts::{site_layout, PageMeta};
use maud::{html, Markup};

pub fn listing_description_meta(land: &Listing) -> String {
    format!(
        "View details for {}, a {} acre property in {}. Price: {}. {}",
        land.name,
        format_area(land.area),
        land.location,
        format_price(land.price),
        land.summary(150)
    )
}

pub fn listing_detail_page(land: &Listing) -> Markup {
    let title = format!("{} | RR Group", land.name);
    let description = listing_description_meta(land);
    let enquire_href = format!(
        "/contact?subject={}",
        url::form_urlencoded::byte_serialize(format!("Enquiry: {}", land.name).as_bytes())
            .collect::<String>()
    );

    site_layout(
        PageMeta::new(&title, "/listings")
            .description(&description)
            .og_image(land.cover_photo()),
        html! {
            main class="container detail" {
                a href="/listings" class="back" { "← Back to listings" }
                h1 { (land.name) }
                p class="muted" { (land.location) }

                div class="gallery" {
                    @for (i, photo) in land.photos.iter().enumerate() {
                        img src=(photo) alt=(format!("{} photo {}", land.name, i + 1))
                            loading=[(i > 0).then_some("lazy")];
                    }
                }

                div class="detail-grid" {
                    section {
                        h2 { "About this property" }
                        p { (land.description) }
                    }
                    aside class="card" {
                        dl class="facts" {
                            dt { "Area" } dd { (format_area(land.area)) " acres" }
                            dt { "Price" } dd { (format_price(land.price)) }
                            dt { "Location" } dd { (land.location) }
                        }
                        a href=(enquire_href) class="button" { "Enquire Now" }
                    }
                }
            }
        },
    )
}
