pub mod admin;
pub mod site;

pub use admin::admin_layout;
pub use site::{site_layout, PageMeta};
