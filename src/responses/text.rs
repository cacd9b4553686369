use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

/// Plain body with an explicit content type (sitemap, stylesheet).
pub fn text_response(content_type: &str, body: impl Into<String>) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type)
        .body(Body::from(body.into()))
        .map_err(|_| ServerError::InternalError)
}
