mod admin_tests;
mod auth_flow_tests;
mod contact_tests;
mod listings_tests;
mod recommendation_tests;
