use crate::errors::ServerError;
use crate::templates::pages::error_page;
use astra::{Body, Response, ResponseBuilder};
use tracing::{error, warn};

/// Turn a handler error into an HTML error page, logging it on the way out.
pub fn error_response(err: ServerError) -> Response {
    let status = err.status();
    if status >= 500 {
        error!(status, error = %err, "request failed");
    } else {
        warn!(status, error = %err, "request rejected");
    }

    let message = public_message(&err);
    let page = error_page(status, &message).into_string();

    match ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(page.clone()))
    {
        Ok(resp) => resp,
        Err(_) => Response::new(Body::from(page)),
    }
}

/// Server-side details stay in the log.
fn public_message(err: &ServerError) -> String {
    match err {
        ServerError::NotFound => "We couldn't find that page.".to_string(),
        ServerError::BadRequest(msg) | ServerError::Unauthorized(msg) => msg.clone(),
        ServerError::Upstream(_) => {
            "Our recommendation service is not responding. Please try again.".to_string()
        }
        ServerError::DbError(_) | ServerError::XlsxError(_) | ServerError::InternalError => {
            "Something went wrong on our side.".to_string()
        }
    }
}
