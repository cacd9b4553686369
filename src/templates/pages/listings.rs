use crate::domain::criteria::{ALL_LOCATIONS, DEFAULT_MAX_PRICE, PRICE_STEP};
use crate::domain::ListingFilterEngine;
use crate::templates::components::{format_price, land_card};
use crate::templates::layouts::{site_layout, PageMeta};
use maud::{html, Markup};

pub fn listings_page(engine: &ListingFilterEngine) -> Markup {
    let criteria = engine.criteria();
    let selected = criteria.location.as_str();
    // exact value: this input is posted back on every filter change
    let min_area = (criteria.min_area > 0.0).then(|| criteria.min_area.to_string());

    site_layout(
        PageMeta::new("Land Listings | RR Group", "/listings")
            .description("Browse our curated collection of premium land properties."),
        html! {
            main class="container" {
                h1 class="section-title" { "Our Land Listings" }
                p class="muted center" {
                    "Browse our curated collection of premium land properties. Use the filters below to find the perfect match for your vision."
                }

                form
                    class="filters card"
                    method="get"
                    action="/listings"
                    hx-get="/listings"
                    hx-target="#listing-results"
                    hx-trigger="change, input delay:300ms"
                    hx-push-url="true"
                {
                    div {
                        label for="q" { "Search" }
                        input type="search" id="q" name="q" value=(criteria.search_query)
                            placeholder="Name or location";
                    }
                    div {
                        label for="location" { "Location" }
                        select id="location" name="location" {
                            option value=(ALL_LOCATIONS) selected[selected == ALL_LOCATIONS] { "All Locations" }
                            @for loc in engine.distinct_locations() {
                                option value=(loc) selected[selected == loc.as_str()] { (loc) }
                            }
                        }
                    }
                    div {
                        label for="min_area" { "Minimum Area (acres)" }
                        input type="number" id="min_area" name="min_area" min="0" step="any"
                            placeholder="e.g. 10" value=[min_area];
                    }
                    div {
                        label for="max_price" {
                            "Max Price: " (max_price_label(criteria.max_price))
                        }
                        input type="range" id="max_price" name="max_price"
                            min="0" max=(DEFAULT_MAX_PRICE) step=(PRICE_STEP)
                            value=(criteria.max_price);
                    }
                    noscript { button type="submit" { "Apply filters" } }
                }

                (listing_results(engine))
            }
        },
    )
}

pub fn listing_results(engine: &ListingFilterEngine) -> Markup {
    let visible = engine.filtered_listings();

    html! {
        div id="listing-results" class="grid" {
            @if visible.is_empty() {
                p class="empty muted" { "No properties match your criteria." }
            } @else {
                @for land in visible {
                    (land_card(land))
                }
            }
        }
    }
}

/// What htmx swaps in as filters change: the grid plus the slider label.
pub fn listing_results_partial(engine: &ListingFilterEngine) -> Markup {
    html! {
        (listing_results(engine))
        span id="max-price-label" hx-swap-oob="true" { (format_price(engine.criteria().max_price)) }
    }
}

fn max_price_label(max_price: f64) -> Markup {
    html! { span id="max-price-label" { (format_price(max_price)) } }
}
