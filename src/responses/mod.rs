pub mod errors;
pub mod html;
pub mod text;
pub mod xlsx;

pub use crate::errors::ResultResp;
pub use errors::error_response;
pub use html::{html_response, redirect, redirect_with_cookie};
pub use text::text_response;
pub use xlsx::xlsx_response;
