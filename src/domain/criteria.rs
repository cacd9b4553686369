// src/domain/criteria.rs

use crate::domain::listing::Listing;

/// Reserved location value meaning "no location filter".
pub const ALL_LOCATIONS: &str = "all";

/// Upper end of the price slider, also the default bound.
pub const DEFAULT_MAX_PRICE: f64 = 5_000_000.0;
pub const PRICE_STEP: f64 = 100_000.0;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LocationFilter {
    #[default]
    All,
    Exact(String),
}

impl LocationFilter {
    pub fn parse(raw: &str) -> Self {
        if raw == ALL_LOCATIONS {
            LocationFilter::All
        } else {
            LocationFilter::Exact(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            LocationFilter::All => ALL_LOCATIONS,
            LocationFilter::Exact(loc) => loc,
        }
    }
}

/// The four independent filter parameters of the listings page.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub search_query: String,
    pub location: LocationFilter,
    /// 0 means no minimum.
    pub min_area: f64,
    /// Inclusive, always in effect.
    pub max_price: f64,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            location: LocationFilter::All,
            min_area: 0.0,
            max_price: DEFAULT_MAX_PRICE,
        }
    }
}

impl FilterCriteria {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// All four predicates combined. `needle` is the search query, already lowercased.
    pub fn matches(&self, listing: &Listing, needle: &str) -> bool {
        matches_text(listing, needle)
            && matches_location(listing, &self.location)
            && matches_min_area(listing, self.min_area)
            && matches_max_price(listing, self.max_price)
    }
}

/// Case-insensitive substring match against name or location. Empty needle passes.
pub fn matches_text(listing: &Listing, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    listing.name.to_lowercase().contains(needle) || listing.location.to_lowercase().contains(needle)
}

pub fn matches_location(listing: &Listing, filter: &LocationFilter) -> bool {
    match filter {
        LocationFilter::All => true,
        LocationFilter::Exact(loc) => listing.location == *loc,
    }
}

/// Inactive unless `min_area > 0`. A NaN area never satisfies an active minimum.
pub fn matches_min_area(listing: &Listing, min_area: f64) -> bool {
    if min_area.is_nan() || min_area <= 0.0 {
        return true;
    }
    listing.area >= min_area
}

/// A NaN price never passes.
pub fn matches_max_price(listing: &Listing, max_price: f64) -> bool {
    listing.price <= max_price
}

/// Raw, unvalidated listing filter inputs as they arrive in a query string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingParams {
    pub q: Option<String>,
    pub location: Option<String>,
    pub min_area: Option<String>,
    pub max_price: Option<String>,
}

/// Lenient numeric parse for form inputs: tolerates whitespace, `$` and thousands separators.
/// Returns `None` for blank, non-numeric or non-finite input.
pub fn parse_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != '$' && *c != '_')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}
