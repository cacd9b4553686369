// src/auth/guard.rs
use astra::Request;

use crate::auth::sessions::{load_user_from_session, SESSION_TTL_SECS};
use crate::errors::ServerError;
use crate::state::AppState;

pub const SESSION_COOKIE: &str = "session";

/// A signed-in user whose email is still on the admin allow-list.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminUser {
    pub user_id: i64,
    pub email: String,
}

/// Value of cookie `name` from a raw `Cookie` header.
pub fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v)
        .filter(|v| !v.is_empty())
}

pub fn session_token(req: &Request) -> Option<String> {
    req.headers()
        .get_all("cookie")
        .iter()
        .filter_map(|h| h.to_str().ok())
        .find_map(|h| cookie_value(h, SESSION_COOKIE))
        .map(str::to_string)
}

/// Re-checks the allow-list on every request, so removing an address
/// from ADMIN_EMAILS locks it out without touching the database.
pub fn current_admin(
    req: &Request,
    state: &AppState,
    now: i64,
) -> Result<Option<AdminUser>, ServerError> {
    let Some(token) = session_token(req) else {
        return Ok(None);
    };

    let found = state
        .db
        .with_conn(|conn| load_user_from_session(conn, &token, now))?;

    Ok(match found {
        Some((user_id, email)) if state.config.is_admin_email(&email) => {
            Some(AdminUser { user_id, email })
        }
        _ => None,
    })
}

pub fn session_cookie(token: &str, secure: bool) -> String {
    let mut cookie = format!(
        "{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={SESSION_TTL_SECS}"
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}
