pub mod criteria;
pub mod engine;
pub mod enquiry;
pub mod fixtures;
pub mod listing;
pub mod upload;
pub mod validation;

pub use engine::ListingFilterEngine;
pub use listing::Listing;
