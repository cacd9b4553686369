use crate::db::listings::list_listing_history;
use crate::router::handle;
use crate::tests::utils::{
    get, get_with_cookie, header, read_body, session_for, test_state, ADMIN_EMAIL,
};
use astra::{Body, Request};
use http::Method;

fn post_form_with_cookie(uri: &str, session: &str, body: &str) -> Request {
    http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Cookie", format!("theme=dark; session={session}"))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(body.as_bytes().to_vec()))
        .unwrap()
}

#[test]
fn admin_routes_redirect_without_session() {
    let state = test_state();
    for path in [
        "/admin",
        "/admin/dashboard",
        "/admin/upload",
        "/admin/reports",
        "/admin/reports/enquiries.xlsx",
        "/admin/does-not-exist",
    ] {
        let resp = handle(get(path), &state).unwrap();
        assert_eq!(resp.status(), 302, "{path}");
        assert_eq!(header(&resp, "location").as_deref(), Some("/admin/login"), "{path}");
    }
}

#[test]
fn bogus_session_cookie_redirects() {
    let state = test_state();
    let resp = handle(get_with_cookie("/admin/dashboard", "not-a-real-token"), &state).unwrap();
    assert_eq!(resp.status(), 302);
}

#[test]
fn session_for_email_off_the_allow_list_redirects() {
    let state = test_state();
    let session = session_for(&state, "someone@else.com");

    let resp = handle(get_with_cookie("/admin/dashboard", &session), &state).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "location").as_deref(), Some("/admin/login"));
}

#[test]
fn dashboard_shows_stats_for_admin() {
    let state = test_state();
    let session = session_for(&state, ADMIN_EMAIL);

    let resp = handle(get_with_cookie("/admin/dashboard", &session), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = read_body(resp);
    assert!(body.contains("Total Lands Listed"));
    assert!(body.contains("<div class=\"stat-value\">6</div>"));
    assert!(body.contains("No recent activity to show."));
    assert!(body.contains(ADMIN_EMAIL));
}

#[test]
fn bare_admin_path_goes_to_dashboard() {
    let state = test_state();
    let session = session_for(&state, ADMIN_EMAIL);

    let resp = handle(get_with_cookie("/admin", &session), &state).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "location").as_deref(), Some("/admin/dashboard"));
}

#[test]
fn login_page_redirects_signed_in_admin() {
    let state = test_state();
    let session = session_for(&state, ADMIN_EMAIL);

    let resp = handle(get_with_cookie("/admin/login", &session), &state).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "location").as_deref(), Some("/admin/dashboard"));
}

#[test]
fn upload_creates_a_public_listing() {
    let state = test_state();
    let session = session_for(&state, ADMIN_EMAIL);

    let body = "title=Serene+Five+Acre+Plot&area=500&area_unit=cents\
        &district=Wayanad&taluk=Vythiri&village=Pozhuthana\
        &price=20000&price_unit=per-cent\
        &description=Tea+estate+land+with+a+stream+along+the+eastern+boundary.\
        &photos=https%3A%2F%2Fimg.example.com%2Fa.jpg";
    let resp = handle(post_form_with_cookie("/admin/upload", &session, body), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(read_body(resp).contains("Upload Successful!"));

    let history = state.db.with_conn(|conn| list_listing_history(conn)).unwrap();
    assert_eq!(history.len(), 7);
    let created = history
        .iter()
        .find(|row| row.listing.name == "Serene Five Acre Plot")
        .expect("uploaded listing");
    assert_eq!(created.listing.area, 5.0);
    assert_eq!(created.listing.price, 10_000_000.0);
    assert_eq!(created.listing.location, "Pozhuthana, Vythiri, Wayanad");

    let page = read_body(
        handle(get(&format!("/listings/{}", created.listing.id)), &state).unwrap(),
    );
    assert!(page.contains("Serene Five Acre Plot | RR Group"));
}

#[test]
fn invalid_upload_keeps_input_and_lists_errors() {
    let state = test_state();
    let session = session_for(&state, ADMIN_EMAIL);

    let resp = handle(
        post_form_with_cookie("/admin/upload", &session, "title=Plot&area=-1&area_unit=sqft"),
        &state,
    )
    .unwrap();
    let body = read_body(resp);

    assert!(body.contains("Title must be at least 5 characters."));
    assert!(body.contains("Area must be a positive number."));
    assert!(body.contains("At least one image is required."));
    assert!(!body.contains("Upload Successful!"));

    let history = state.db.with_conn(|conn| list_listing_history(conn)).unwrap();
    assert_eq!(history.len(), 6);
}

#[test]
fn reports_page_lists_history() {
    let state = test_state();
    let session = session_for(&state, ADMIN_EMAIL);

    let body = read_body(handle(get_with_cookie("/admin/reports", &session), &state).unwrap());
    assert!(body.contains("Uploaded Land History"));
    assert!(body.contains("Hill Country Acreage"));
    assert!(body.contains("/admin/reports/quotations.xlsx"));
}

#[test]
fn exports_are_xlsx_downloads() {
    let state = test_state();
    let session = session_for(&state, ADMIN_EMAIL);

    for (path, name) in [
        ("/admin/reports/enquiries.xlsx", "enquiries.xlsx"),
        ("/admin/reports/quotations.xlsx", "quotations.xlsx"),
        ("/admin/reports/listings.xlsx", "listings.xlsx"),
    ] {
        let resp = handle(get_with_cookie(path, &session), &state).unwrap();
        assert_eq!(resp.status(), 200);
        assert_eq!(
            header(&resp, "content-type").as_deref(),
            Some("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet")
        );
        assert_eq!(
            header(&resp, "content-disposition"),
            Some(format!("attachment; filename=\"{name}\""))
        );

        let mut bytes = Vec::new();
        std::io::Read::read_to_end(&mut resp.into_body().reader(), &mut bytes).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }
}
