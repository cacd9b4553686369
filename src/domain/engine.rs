// src/domain/engine.rs

use std::collections::BTreeSet;
use std::mem;

use tracing::debug;

use crate::domain::criteria::{
    parse_number, FilterCriteria, ListingParams, LocationFilter, ALL_LOCATIONS,
};
use crate::domain::listing::Listing;

/// Lifecycle of the externally supplied initial search query.
#[derive(Debug, Default)]
enum Seed {
    #[default]
    Empty,
    /// Arrived before the first load; applied once loading completes.
    Pending(String),
    /// Applied, or superseded by a user edit. Never applied again.
    Consumed,
}

/// Holds the full listing set and the current criteria, and keeps the
/// filtered view in sync after every update.
///
/// Every setter recomputes from the full set before returning, so relaxing a
/// criterion restores listings an earlier, stricter value excluded.
#[derive(Debug, Default)]
pub struct ListingFilterEngine {
    listings: Vec<Listing>,
    locations: BTreeSet<String>,
    criteria: FilterCriteria,
    /// Indices into `listings`, in their original order.
    visible: Vec<usize>,
    loaded: bool,
    seed: Seed,
}

impl ListingFilterEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the full set. A seed held since before the first load is applied here.
    pub fn load(&mut self, listings: Vec<Listing>) {
        self.locations = listings
            .iter()
            .map(|l| l.location.clone())
            .filter(|loc| loc != ALL_LOCATIONS)
            .collect();
        self.listings = listings;
        self.loaded = true;

        if let Some(query) = self.take_pending_seed() {
            debug!(query = %query, "applying seeded search query");
            self.criteria.search_query = query;
        }

        self.recompute();
    }

    /// Offer an initial search query from outside (e.g. a deep link).
    /// Used at most once, and never after the user has edited the query.
    pub fn seed_search_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        match self.seed {
            Seed::Consumed => {
                debug!(query = %query, "seed already consumed, ignoring");
            }
            _ if self.loaded => {
                self.seed = Seed::Consumed;
                self.criteria.search_query = query;
                self.recompute();
            }
            _ => self.seed = Seed::Pending(query),
        }
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        // A user edit wins over any seed that has not landed yet.
        self.seed = Seed::Consumed;
        self.criteria.search_query = query.into();
        self.recompute();
    }

    pub fn set_location(&mut self, location: &str) {
        self.criteria.location = LocationFilter::parse(location);
        self.recompute();
    }

    /// Any value <= 0 (or NaN) means no minimum.
    pub fn set_min_area(&mut self, min_area: f64) {
        self.criteria.min_area = if min_area.is_nan() || min_area <= 0.0 {
            0.0
        } else {
            min_area
        };
        self.recompute();
    }

    /// NaN keeps the previous bound.
    pub fn set_max_price(&mut self, max_price: f64) {
        if max_price.is_nan() {
            debug!("ignoring NaN max price");
        } else {
            self.criteria.max_price = max_price;
        }
        self.recompute();
    }

    /// Apply raw query-string inputs through the setters, coercing at the boundary:
    /// a blank location means all, an unparsable minimum area means no minimum,
    /// an unparsable maximum price keeps the current bound. `q` is not handled here;
    /// it is a seed, see [`Self::seed_search_query`].
    pub fn apply_params(&mut self, params: &ListingParams) {
        if let Some(location) = params.location.as_deref() {
            if location.trim().is_empty() {
                self.set_location(ALL_LOCATIONS);
            } else {
                self.set_location(location);
            }
        }
        if let Some(raw) = params.min_area.as_deref() {
            self.set_min_area(parse_number(raw).unwrap_or(0.0));
        }
        if let Some(price) = params.max_price.as_deref().and_then(parse_number) {
            self.set_max_price(price);
        }
    }

    pub fn filtered_listings(&self) -> Vec<&Listing> {
        self.visible.iter().map(|&i| &self.listings[i]).collect()
    }

    pub fn filtered_len(&self) -> usize {
        self.visible.len()
    }

    pub fn distinct_locations(&self) -> &BTreeSet<String> {
        &self.locations
    }

    pub fn all_listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    fn take_pending_seed(&mut self) -> Option<String> {
        match mem::take(&mut self.seed) {
            Seed::Pending(query) => {
                self.seed = Seed::Consumed;
                Some(query)
            }
            other => {
                self.seed = other;
                None
            }
        }
    }

    fn recompute(&mut self) {
        let needle = self.criteria.search_query.to_lowercase();
        let visible = self
            .listings
            .iter()
            .enumerate()
            .filter(|(_, listing)| self.criteria.matches(listing, &needle))
            .map(|(i, _)| i)
            .collect();
        self.visible = visible;
    }
}
