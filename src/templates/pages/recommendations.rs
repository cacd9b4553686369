use crate::domain::validation::FieldErrors;
use crate::domain::Listing;
use crate::recommend::{Recommendation, RecommendationForm};
use crate::templates::components::field_error;
use crate::templates::layouts::{site_layout, PageMeta};
use maud::{html, Markup};

/// What to show under the preference form.
pub enum RecommendationView<'a> {
    /// Nothing submitted yet (or the form was invalid).
    Empty,
    /// Each recommendation with the listing it points at, if it exists.
    Results(Vec<(&'a Recommendation, Option<&'a Listing>)>),
    /// No model configured.
    Unavailable,
    /// The model call failed.
    Failed,
}

pub fn recommendations_page(
    form: &RecommendationForm,
    errors: &FieldErrors,
    view: &RecommendationView,
    enabled: bool,
) -> Markup {
    site_layout(
        PageMeta::new("AI Land Recommender | RR Group", "/recommendations")
            .description("Describe your ideal property, and our AI will find the perfect match from our exclusive listings."),
        html! {
            main class="container narrow" {
                h1 class="section-title" { "AI Land Recommender" }
                p class="lead center" {
                    "Describe your ideal property, and our AI will find the perfect match from our exclusive listings."
                }

                div class="card" {
                    form method="post" action="/recommendations"
                        hx-post="/recommendations" hx-target="#recommendation-results"
                        hx-select="#recommendation-results" hx-swap="outerHTML"
                        hx-disabled-elt="button"
                    {
                        label for="location" { "Desired Location" }
                        input type="text" id="location" name="location" value=(form.location)
                            placeholder="e.g., Napa Valley, CA";
                        (field_error(errors, "location"))

                        label for="area" { "Desired Area" }
                        input type="text" id="area" name="area" value=(form.area) placeholder="e.g., 50 acres";
                        (field_error(errors, "area"))

                        label for="price" { "Price Range" }
                        input type="text" id="price" name="price" value=(form.price)
                            placeholder="e.g., around $2,000,000";
                        (field_error(errors, "price"))

                        button type="submit" disabled[!enabled] { "Generate Recommendations" }
                    }
                }

                @if !enabled {
                    p class="notice" { "AI recommendations are currently unavailable. Please browse our listings or contact us directly." }
                }

                (recommendation_results(view))
            }
        },
    )
}

fn recommendation_results(view: &RecommendationView) -> Markup {
    html! {
        section id="recommendation-results" {
            @match view {
                RecommendationView::Empty => {}
                RecommendationView::Unavailable => {
                    p class="notice" { "AI recommendations are currently unavailable." }
                }
                RecommendationView::Failed => {
                    p class="notice error" { "Failed to generate recommendations. Please try again." }
                }
                RecommendationView::Results(items) => {
                    h2 class="section-title" { "Your Recommended Properties" }
                    @if items.is_empty() {
                        p class="muted center" { "No listings matched your preferences. Try broadening them." }
                    }
                    div class="grid" {
                        @for (rec, listing) in items {
                            (recommendation_card(rec, *listing))
                        }
                    }
                }
            }
        }
    }
}

fn recommendation_card(rec: &Recommendation, listing: Option<&Listing>) -> Markup {
    let percent = rec.score_percent();
    html! {
        article class="card recommendation" {
            @match listing {
                Some(land) => h3 { a href=(format!("/listings/{}", land.id)) { (land.name) } },
                None => h3 { (rec.fallback_title()) },
            }
            p class="muted small" { "Suitability Score" }
            div class="score" {
                progress max="100" value=(percent) {}
                strong { (percent) "%" }
            }
            p { (rec.description) }
        }
    }
}
