use astra::Response;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, missing resources, etc.) or downstream layers (DB, model API, xlsx).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Database Error: {0}")]
    DbError(String),
    #[error("Spreadsheet Error: {0}")]
    XlsxError(String),
    #[error("Upstream Error: {0}")]
    Upstream(String),
    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::Unauthorized(_) => 401,
            ServerError::Upstream(_) => 502,
            ServerError::DbError(_) | ServerError::XlsxError(_) | ServerError::InternalError => {
                500
            }
        }
    }
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
