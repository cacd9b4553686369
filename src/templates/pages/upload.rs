use crate::domain::upload::UploadForm;
use crate::domain::validation::FieldErrors;
use crate::domain::Listing;
use crate::templates::components::{field_error, format_area, format_price};
use crate::templates::layouts::admin_layout;
use maud::{html, Markup};

pub fn upload_page(
    admin_email: &str,
    form: &UploadForm,
    errors: &FieldErrors,
    created: Option<&Listing>,
) -> Markup {
    admin_layout(
        "Upload Land",
        "/admin/upload",
        admin_email,
        html! {
            @if let Some(land) = created {
                div class="notice success" {
                    h3 { "Upload Successful!" }
                    p {
                        "Property \"" (land.name) "\" has been listed: "
                        (format_area(land.area)) " acres for " (format_price(land.price)) ". "
                        a href=(format!("/listings/{}", land.id)) { "View listing" }
                    }
                }
            }

            form class="card" method="post" action="/admin/upload" {
                label for="title" { "Property Title" }
                input type="text" id="title" name="title" value=(form.title)
                    placeholder="e.g., Serene 5 Acre Plot with Lake View";
                (field_error(errors, "title"))

                div class="row" {
                    div {
                        label for="area" { "Area" }
                        input type="text" inputmode="decimal" id="area" name="area" value=(form.area)
                            placeholder="e.g., 5000";
                        (field_error(errors, "area"))
                    }
                    div {
                        label for="area_unit" { "Unit" }
                        select id="area_unit" name="area_unit" {
                            option value="sqft" selected[form.area_unit == "sqft"] { "Sq.ft" }
                            option value="cents" selected[form.area_unit == "cents"] { "Cents" }
                        }
                        (field_error(errors, "area_unit"))
                    }
                }

                div class="row" {
                    div {
                        label for="price" { "Price" }
                        input type="text" inputmode="decimal" id="price" name="price" value=(form.price)
                            placeholder="e.g., 75000";
                        (field_error(errors, "price"))
                    }
                    div {
                        label for="price_unit" { "Unit" }
                        select id="price_unit" name="price_unit" {
                            option value="per-sqft" selected[form.price_unit == "per-sqft"] { "per Sq.ft" }
                            option value="per-cent" selected[form.price_unit == "per-cent"] { "per Cent" }
                        }
                        (field_error(errors, "price_unit"))
                    }
                }

                fieldset {
                    legend { "Location" }
                    div class="row" {
                        div {
                            input type="text" name="district" value=(form.district) placeholder="District" aria-label="District";
                            (field_error(errors, "district"))
                        }
                        div {
                            input type="text" name="taluk" value=(form.taluk) placeholder="Taluk" aria-label="Taluk";
                            (field_error(errors, "taluk"))
                        }
                        div {
                            input type="text" name="village" value=(form.village) placeholder="Village" aria-label="Village";
                            (field_error(errors, "village"))
                        }
                    }
                }

                label for="description" { "Description" }
                textarea id="description" name="description" rows="6"
                    placeholder="Detailed description of the property..." { (form.description) }
                (field_error(errors, "description"))

                label for="photos" { "Property Images" }
                textarea id="photos" name="photos" rows="3"
                    placeholder="One image URL per line" { (form.photos) }
                p class="muted small" { "Paste one public image URL per line. The first is used as the cover." }
                (field_error(errors, "photos"))

                button type="submit" { "Upload Property" }
            }
        },
    )
}
