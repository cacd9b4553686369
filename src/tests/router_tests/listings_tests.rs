use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{get, header, read_body, test_state};

fn card_count(body: &str) -> usize {
    body.matches("class=\"card land-card\"").count()
}

#[test]
fn listings_page_shows_every_sample_listing() {
    let state = test_state();
    let resp = handle(get("/listings"), &state).expect("handler failed");
    assert_eq!(resp.status(), 200);

    let body = read_body(resp);
    assert_eq!(card_count(&body), 6);
    assert!(body.contains("<option value=\"all\" selected>All Locations</option>"));
    for loc in ["Napa Valley, CA", "Aspen, CO", "Lake Tahoe, NV", "Sedona, AZ"] {
        assert!(body.contains(&format!("<option value=\"{loc}\">{loc}</option>")), "{loc}");
    }
}

#[test]
fn deep_link_query_seeds_search() {
    let state = test_state();
    let body = read_body(handle(get("/listings?q=tahoe"), &state).unwrap());

    assert_eq!(card_count(&body), 1);
    assert!(body.contains("Lakefront Pines"));
    assert!(body.contains("value=\"tahoe\""));
}

#[test]
fn price_bound_on_top_of_search_empties_results() {
    let state = test_state();
    let body = read_body(handle(get("/listings?q=tahoe&max_price=2000000"), &state).unwrap());

    assert_eq!(card_count(&body), 0);
    assert!(body.contains("No properties match your criteria."));
}

#[test]
fn location_and_min_area_combine() {
    let state = test_state();

    let body = read_body(
        handle(get("/listings?location=Napa+Valley%2C+CA&min_area=40"), &state).unwrap(),
    );
    assert_eq!(card_count(&body), 1);
    assert!(body.contains("Golden Valley Estate"));

    let body = read_body(
        handle(get("/listings?location=Napa+Valley%2C+CA&min_area=60"), &state).unwrap(),
    );
    assert_eq!(card_count(&body), 0);
}

#[test]
fn garbage_numbers_fall_back() {
    let state = test_state();
    let body = read_body(handle(get("/listings?min_area=abc&max_price=lots"), &state).unwrap());
    assert_eq!(card_count(&body), 6);
}

#[test]
fn min_area_input_echoes_the_exact_value() {
    let state = test_state();

    let body = read_body(handle(get("/listings?min_area=40.456"), &state).unwrap());
    assert!(body.contains("value=\"40.456\""));

    // tiny minimums must not round to 0 and switch the filter off
    let body = read_body(handle(get("/listings?min_area=0.004"), &state).unwrap());
    assert!(body.contains("value=\"0.004\""));
}

#[test]
fn search_box_describes_what_it_matches() {
    let state = test_state();
    let body = read_body(handle(get("/listings"), &state).unwrap());
    assert!(body.contains("placeholder=\"Name or location\""));
}

#[test]
fn htmx_request_gets_results_fragment() {
    let state = test_state();
    let req = http::Request::builder()
        .uri("/listings?location=Sedona%2C+AZ")
        .header("HX-Request", "true")
        .body(astra::Body::empty())
        .unwrap();

    let resp = handle(req, &state).unwrap();
    assert!(header(&resp, "content-type").unwrap().starts_with("text/html"));
    let body = read_body(resp);

    assert!(!body.contains("<html"));
    assert!(body.contains("id=\"listing-results\""));
    assert!(body.contains("hx-swap-oob"));
    assert_eq!(card_count(&body), 1);
    assert!(body.contains("Red Rock Ranch"));
}

#[test]
fn home_features_three_listings() {
    let state = test_state();
    let body = read_body(handle(get("/"), &state).unwrap());
    assert_eq!(card_count(&body), 3);
    assert!(body.contains("Featured Properties"));
}

#[test]
fn listing_detail_renders_title_and_facts() {
    let state = test_state();
    let resp = handle(get("/listings/aspen-meadows"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = read_body(resp);
    assert!(body.contains("<title>Aspen Meadows | RR Group</title>"));
    assert!(body.contains("View details for Aspen Meadows, a 10 acre property in Aspen, CO. Price: $1,800,000."));
    assert!(body.contains("$1,800,000"));
    assert!(body.contains("/contact?subject=Enquiry%3A+Aspen+Meadows"));
}

#[test]
fn unknown_listing_is_not_found() {
    let state = test_state();
    match handle(get("/listings/no-such-land"), &state) {
        Err(ServerError::NotFound) => {}
        other => panic!("expected NotFound, got {:?}", other.map(|r| r.status())),
    }
}

#[test]
fn unknown_route_is_not_found() {
    let state = test_state();
    assert!(matches!(
        handle(get("/nope"), &state),
        Err(ServerError::NotFound)
    ));
}

#[test]
fn sitemap_includes_listing_urls() {
    let state = test_state();
    let resp = handle(get("/sitemap.xml"), &state).unwrap();
    assert!(header(&resp, "content-type").unwrap().starts_with("application/xml"));

    let body = read_body(resp);
    assert!(body.contains("<loc>http://localhost:3000/listings/red-rock-ranch</loc>"));
    assert!(body.contains("<loc>http://localhost:3000/about</loc>"));
}

#[test]
fn stylesheet_is_served() {
    let state = test_state();
    let resp = handle(get("/static/main.css"), &state).unwrap();
    assert_eq!(header(&resp, "content-type").as_deref(), Some("text/css; charset=utf-8"));
    assert!(read_body(resp).contains(".land-card"));
}
