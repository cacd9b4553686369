pub mod export_xlsx;

pub use export_xlsx::{enquiries_xlsx, listings_xlsx, quotations_xlsx};
