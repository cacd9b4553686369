use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use maud::Markup;

pub fn html_response(markup: Markup) -> ResultResp {
    html_response_with_status(200, markup)
}

fn html_response_with_status(status: u16, markup: Markup) -> ResultResp {
    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(markup.into_string()))
        .map_err(|_| ServerError::InternalError)
}

/// 302 to `location`.
pub fn redirect(location: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(302)
        .header("Location", location)
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}

/// 302 that also sets (or clears) a cookie.
pub fn redirect_with_cookie(location: &str, set_cookie: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(302)
        .header("Location", location)
        .header("Set-Cookie", set_cookie)
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}
