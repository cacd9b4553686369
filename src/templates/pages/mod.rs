pub mod about;
pub mod check_email;
pub mod contact;
pub mod dashboard;
pub mod error;
pub mod home;
pub mod listing_detail;
pub mod listings;
pub mod login;
pub mod recommendations;
pub mod reports;
pub mod upload;

pub use about::about_page;
pub use check_email::{check_email_content, check_email_page};
pub use contact::{contact_form, contact_page, contact_thanks};
pub use dashboard::{dashboard_page, DashboardVm};
pub use error::error_page;
pub use home::home_page;
pub use listing_detail::listing_detail_page;
pub use listings::{listing_results_partial, listings_page};
pub use login::login_page;
pub use recommendations::{recommendations_page, RecommendationView};
pub use reports::reports_page;
pub use upload::upload_page;
