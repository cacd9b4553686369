pub mod auth;
pub mod connection;
pub mod enquiries;
pub mod listings;
pub mod magic_auth;
pub mod quotations;
pub mod stats;

pub use connection::{init_db, Database};
