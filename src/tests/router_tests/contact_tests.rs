use crate::db::enquiries::list_enquiries;
use crate::router::handle;
use crate::tests::utils::{get, post_form, read_body, test_state};

#[test]
fn contact_page_prefills_subject() {
    let state = test_state();
    let body = read_body(handle(get("/contact?subject=Enquiry%3A+Aspen+Meadows"), &state).unwrap());

    assert!(body.contains("Send a Message"));
    assert!(body.contains("value=\"Enquiry: Aspen Meadows\""));
}

#[test]
fn invalid_submission_shows_errors_and_stores_nothing() {
    let state = test_state();
    let resp = handle(
        post_form("/contact", "name=J&email=not-an-email&subject=Hi&message=short"),
        &state,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);

    let body = read_body(resp);
    assert!(body.contains("Name must be at least 2 characters."));
    assert!(body.contains("Please enter a valid email address."));
    assert!(body.contains("Subject must be at least 3 characters."));
    assert!(body.contains("Message must be at least 10 characters."));
    // entered values survive the round trip
    assert!(body.contains("value=\"not-an-email\""));

    let stored = state.db.with_conn(|conn| list_enquiries(conn, None)).unwrap();
    assert!(stored.is_empty());
}

#[test]
fn valid_submission_is_stored_and_thanked() {
    let state = test_state();
    let resp = handle(
        post_form(
            "/contact",
            "name=Jane+Doe&email=Jane%40Example.com&subject=Site+visit&message=I+would+like+to+walk+the+parcel.",
        ),
        &state,
    )
    .unwrap();

    let body = read_body(resp);
    assert!(body.contains("Message Sent!"));
    assert!(body.contains("<html"));

    let stored = state.db.with_conn(|conn| list_enquiries(conn, None)).unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name, "Jane Doe");
    assert_eq!(stored[0].email, "jane@example.com");
    assert_eq!(stored[0].subject, "Site visit");
}

#[test]
fn htmx_submission_gets_fragment() {
    let state = test_state();
    let req = http::Request::builder()
        .method("POST")
        .uri("/contact")
        .header("HX-Request", "true")
        .body(astra::Body::from(
            "name=Jane+Doe&email=jane%40example.com&subject=Site+visit&message=Looking+forward+to+it."
                .as_bytes()
                .to_vec(),
        ))
        .unwrap();

    let body = read_body(handle(req, &state).unwrap());
    assert!(!body.contains("<html"));
    assert!(body.contains("Message Sent!"));
}
