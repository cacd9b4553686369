use crate::db::quotations::list_quotations;
use crate::domain::Listing;
use crate::errors::ServerError;
use crate::recommend::{Recommendation, RecommendationInput, RecommendationOutput, Recommender};
use crate::router::handle;
use crate::tests::utils::{get, post_form, read_body, test_state};

/// Picks the two cheapest listings, plus one id the catalog doesn't have.
struct CheapestFirst;

impl Recommender for CheapestFirst {
    fn recommend(
        &self,
        _input: &RecommendationInput,
        catalog: &[Listing],
    ) -> Result<RecommendationOutput, ServerError> {
        let mut sorted: Vec<&Listing> = catalog.iter().collect();
        sorted.sort_by(|a, b| a.price.total_cmp(&b.price));

        let mut recommendations: Vec<Recommendation> = sorted
            .iter()
            .take(2)
            .zip([0.92, 0.61])
            .map(|(land, score)| Recommendation {
                land_id: land.id.clone(),
                description: format!("{} fits the budget.", land.name),
                suitability_score: score,
            })
            .collect();
        recommendations.push(Recommendation {
            land_id: "coastal-bluff-lot".into(),
            description: "Recently sold.".into(),
            suitability_score: 0.3,
        });

        Ok(RecommendationOutput { recommendations })
    }
}

struct AlwaysFails;

impl Recommender for AlwaysFails {
    fn recommend(
        &self,
        _input: &RecommendationInput,
        _catalog: &[Listing],
    ) -> Result<RecommendationOutput, ServerError> {
        Err(ServerError::Upstream("model timed out".into()))
    }
}

const VALID: &str = "location=Texas+hill+country&area=100%2B+acres&price=under+%241M";

#[test]
fn page_says_unavailable_without_a_model() {
    let state = test_state();
    let body = read_body(handle(get("/recommendations"), &state).unwrap());

    assert!(body.contains("AI recommendations are currently unavailable"));
    assert!(body.contains("<button type=\"submit\" disabled>"));
}

#[test]
fn submission_without_model_still_records_quotation() {
    let state = test_state();
    let resp = handle(post_form("/recommendations", VALID), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(read_body(resp).contains("AI recommendations are currently unavailable."));

    let rows = state.db.with_conn(|conn| list_quotations(conn)).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].location, "Texas hill country");
    assert_eq!(rows[0].recommendation_count, 0);
}

#[test]
fn invalid_form_shows_errors_and_skips_the_model() {
    let state = test_state().with_recommender(Box::new(CheapestFirst));

    let body = read_body(
        handle(post_form("/recommendations", "location=TX&area=&price=+"), &state).unwrap(),
    );
    assert!(body.contains("Location should be at least 3 characters."));
    assert!(body.contains("Please specify an area."));
    assert!(body.contains("Please specify a price range."));
    assert!(!body.contains("Your Recommended Properties"));

    let rows = state.db.with_conn(|conn| list_quotations(conn)).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn results_link_known_listings_and_record_the_request() {
    let state = test_state().with_recommender(Box::new(CheapestFirst));

    let body = read_body(handle(post_form("/recommendations", VALID), &state).unwrap());

    assert!(body.contains("Your Recommended Properties"));
    assert!(body.contains("<a href=\"/listings/hill-country-acreage\">Hill Country Acreage</a>"));
    assert!(body.contains("<a href=\"/listings/red-rock-ranch\">Red Rock Ranch</a>"));
    assert!(body.contains("92%"));
    assert!(body.contains("61%"));
    // unknown ids still render, under a readable title
    assert!(body.contains("<h3>Coastal Bluff Lot</h3>"));
    // the form keeps what was typed
    assert!(body.contains("value=\"under $1M\""));

    let rows = state.db.with_conn(|conn| list_quotations(conn)).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].area, "100+ acres");
    assert_eq!(rows[0].recommendation_count, 3);
}

#[test]
fn model_receives_trimmed_preferences() {
    let state = test_state().with_recommender(Box::new(CheapestFirst));
    handle(
        post_form("/recommendations", "location=++Sedona++&area=30+acres&price=1M"),
        &state,
    )
    .unwrap();

    let rows = state.db.with_conn(|conn| list_quotations(conn)).unwrap();
    assert_eq!(rows[0].location, "Sedona");
}

#[test]
fn model_failure_renders_notice() {
    let state = test_state().with_recommender(Box::new(AlwaysFails));

    let resp = handle(post_form("/recommendations", VALID), &state).unwrap();
    assert_eq!(resp.status(), 200);
    let body = read_body(resp);
    assert!(body.contains("Failed to generate recommendations. Please try again."));

    let rows = state.db.with_conn(|conn| list_quotations(conn)).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].recommendation_count, 0);
}
