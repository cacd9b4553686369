use crate::db::magic_auth::request_magic_link;
use crate::errors::ServerError;
use crate::router::{handle, unix_now};
use crate::state::AppState;
use crate::tests::utils::{
    get, get_with_cookie, header, post_form, read_body, session_for, test_state, ADMIN_EMAIL,
};
use astra::{Body, Request};
use http::Method;

fn magic_link_count(state: &AppState) -> i64 {
    state
        .db
        .with_conn(|conn| {
            conn.query_row("select count(*) from magic_links", [], |r| r.get(0))
                .map_err(|e| ServerError::DbError(e.to_string()))
        })
        .unwrap()
}

/// The `session=...` pair out of a Set-Cookie header.
fn session_pair(set_cookie: &str) -> String {
    set_cookie.split(';').next().unwrap_or_default().to_string()
}

#[test]
fn login_page_renders() {
    let state = test_state();
    let resp = handle(get("/admin/login"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(read_body(resp).contains("Admin sign in"));
}

#[test]
fn login_answer_is_the_same_for_everyone() {
    let state = test_state();

    let admin = read_body(
        handle(post_form("/admin/login", "email=Admin%40Example.com"), &state).unwrap(),
    );
    assert_eq!(magic_link_count(&state), 1);

    let stranger = read_body(
        handle(post_form("/admin/login", "email=stranger%40example.com"), &state).unwrap(),
    );
    assert_eq!(magic_link_count(&state), 1);

    assert!(admin.contains("Check your email"));
    assert!(stranger.contains("Check your email"));
    assert_eq!(
        admin.replace("admin@example.com", "X"),
        stranger.replace("stranger@example.com", "X")
    );
}

#[test]
fn malformed_email_issues_nothing() {
    let state = test_state();
    let resp = handle(post_form("/admin/login", "email=nope"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(magic_link_count(&state), 0);
}

#[test]
fn htmx_login_gets_fragment() {
    let state = test_state();
    let req = http::Request::builder()
        .method(Method::POST)
        .uri("/admin/login")
        .header("HX-Request", "true")
        .body(Body::from(b"email=admin%40example.com".to_vec()))
        .unwrap();

    let body = read_body(handle(req, &state).unwrap());
    assert!(!body.contains("<html"));
    assert!(body.contains("Check your email"));
}

#[test]
fn magic_link_signs_admin_in_once() {
    let state = test_state();
    let issued = request_magic_link(&state.db, ADMIN_EMAIL, unix_now()).unwrap();
    let uri = format!("/auth/magic?token={}", issued.token);

    let resp = handle(get(&uri), &state).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "location").as_deref(), Some("/admin/dashboard"));

    let set_cookie = header(&resp, "set-cookie").expect("session cookie");
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Lax"));
    assert!(!set_cookie.contains("Secure"));

    let pair = session_pair(&set_cookie);
    let session = pair.trim_start_matches("session=");
    let dash = handle(get_with_cookie("/admin/dashboard", session), &state).unwrap();
    assert_eq!(dash.status(), 200);
    assert!(read_body(dash).contains("Total Lands Listed"));

    assert!(matches!(
        handle(get(&uri), &state),
        Err(ServerError::Unauthorized(_))
    ));
}

#[test]
fn missing_or_unknown_token_is_rejected() {
    let state = test_state();
    assert!(matches!(
        handle(get("/auth/magic"), &state),
        Err(ServerError::BadRequest(_))
    ));
    assert!(matches!(
        handle(get("/auth/magic?token=made-up"), &state),
        Err(ServerError::Unauthorized(_))
    ));
}

#[test]
fn link_for_removed_admin_does_not_sign_in() {
    let state = test_state();
    // a user who once had access, issued directly
    let issued = request_magic_link(&state.db, "former@example.com", unix_now()).unwrap();

    let result = handle(get(&format!("/auth/magic?token={}", issued.token)), &state);
    assert!(matches!(result, Err(ServerError::Unauthorized(_))));
}

#[test]
fn logout_revokes_session() {
    let state = test_state();
    let session = session_for(&state, ADMIN_EMAIL);

    let req: Request = http::Request::builder()
        .method(Method::POST)
        .uri("/admin/logout")
        .header("Cookie", format!("session={session}"))
        .body(Body::empty())
        .unwrap();
    let resp = handle(req, &state).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "location").as_deref(), Some("/admin/login"));
    assert!(header(&resp, "set-cookie").unwrap().contains("Max-Age=0"));

    let after = handle(get_with_cookie("/admin/dashboard", &session), &state).unwrap();
    assert_eq!(after.status(), 302);
}
