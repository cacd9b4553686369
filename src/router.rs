use std::collections::HashMap;
use std::io::Read;

use astra::Request;
use tracing::debug;

use crate::errors::ServerError;
use crate::handlers::{admin, public};
use crate::responses::{redirect, text_response, ResultResp};
use crate::state::AppState;

const MAIN_CSS: &str = include_str!("../static/main.css");

/// Form bodies beyond this are rejected.
const MAX_FORM_BYTES: u64 = 1024 * 1024;

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    debug!(%method, %path, "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => public::home(state),
        ("GET", "/listings") => public::listings(&req, state),
        ("GET", "/about") => public::about(),
        ("GET", "/contact") => public::contact(&req),
        ("POST", "/contact") => public::submit_contact(req, state),
        ("GET", "/recommendations") => public::recommendations(state),
        ("POST", "/recommendations") => public::submit_recommendations(req, state),
        ("GET", "/sitemap.xml") => public::sitemap(state),
        ("GET", "/static/main.css") => text_response("text/css; charset=utf-8", MAIN_CSS),

        ("GET", "/admin/login") => admin::login(&req, state),
        ("POST", "/admin/login") => admin::request_link(req, state),
        ("GET", "/auth/magic") => admin::redeem_link(&req, state),
        (_, p) if p == "/admin" || p.starts_with("/admin/") => guarded_admin(req, state),

        ("GET", p) => match p.strip_prefix("/listings/") {
            Some(id) if !id.is_empty() && !id.contains('/') => public::listing_detail(id, state),
            _ => Err(ServerError::NotFound),
        },
        _ => Err(ServerError::NotFound),
    }
}

/// Every admin route except login needs a live session for an allow-listed email.
fn guarded_admin(req: Request, state: &AppState) -> ResultResp {
    let Some(user) = crate::auth::guard::current_admin(&req, state, unix_now())? else {
        return redirect("/admin/login");
    };

    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/admin") | ("GET", "/admin/") => redirect("/admin/dashboard"),
        ("GET", "/admin/dashboard") => admin::dashboard(&user, state),
        ("GET", "/admin/upload") => admin::upload_form(&user),
        ("POST", "/admin/upload") => admin::submit_upload(req, &user, state),
        ("GET", "/admin/reports") => admin::reports(&user, state),
        ("GET", "/admin/reports/enquiries.xlsx") => admin::export_enquiries(state),
        ("GET", "/admin/reports/quotations.xlsx") => admin::export_quotations(state),
        ("GET", "/admin/reports/listings.xlsx") => admin::export_listings(state),
        ("POST", "/admin/logout") => admin::logout(&req, state),
        _ => Err(ServerError::NotFound),
    }
}

pub fn unix_now() -> i64 {
    time::OffsetDateTime::now_utc().unix_timestamp()
}

/// Decoded query string; later duplicates win.
pub fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

/// Decoded `application/x-www-form-urlencoded` body.
pub fn read_form(req: Request) -> Result<HashMap<String, String>, ServerError> {
    let mut raw = Vec::new();
    req.into_body()
        .reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut raw)
        .map_err(|e| ServerError::BadRequest(format!("could not read form body: {e}")))?;

    if raw.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::BadRequest("form body too large".into()));
    }

    Ok(url::form_urlencoded::parse(&raw).into_owned().collect())
}

/// True for requests issued by htmx, which expect a fragment back.
pub fn is_htmx(req: &Request) -> bool {
    req.headers()
        .get("hx-request")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == "true")
}

pub fn field(form: &HashMap<String, String>, name: &str) -> String {
    form.get(name).cloned().unwrap_or_default()
}
