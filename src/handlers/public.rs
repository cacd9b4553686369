use std::collections::HashMap;

use astra::Request;
use tracing::{info, warn};

use crate::db::enquiries::insert_enquiry;
use crate::db::listings::{find_listing, list_listing_history, load_all_listings};
use crate::db::quotations::record_quotation_request;
use crate::domain::criteria::ListingParams;
use crate::domain::enquiry::ContactForm;
use crate::domain::validation::FieldErrors;
use crate::domain::ListingFilterEngine;
use crate::errors::ServerError;
use crate::recommend::RecommendationForm;
use crate::responses::{html_response, text_response, ResultResp};
use crate::router::{field, is_htmx, parse_query, read_form, unix_now};
use crate::sitemap::build_sitemap;
use crate::state::AppState;
use crate::templates::pages::{self, RecommendationView};

const FEATURED_COUNT: usize = 3;

pub fn home(state: &AppState) -> ResultResp {
    let mut listings = state.db.with_conn(|conn| load_all_listings(conn))?;
    listings.truncate(FEATURED_COUNT);
    html_response(pages::home_page(&listings))
}

fn listing_params(query: &HashMap<String, String>) -> ListingParams {
    ListingParams {
        q: query.get("q").cloned(),
        location: query.get("location").cloned(),
        min_area: query.get("min_area").cloned(),
        max_price: query.get("max_price").cloned(),
    }
}

/// One request is one filter session: `q` seeds the text query, the other
/// parameters go through the setters after the listings are loaded.
pub fn listings(req: &Request, state: &AppState) -> ResultResp {
    let params = listing_params(&parse_query(req));

    let mut engine = ListingFilterEngine::new();
    if let Some(q) = params.q.as_deref() {
        engine.seed_search_query(q);
    }
    engine.load(state.db.with_conn(|conn| load_all_listings(conn))?);
    engine.apply_params(&params);

    if is_htmx(req) {
        html_response(pages::listing_results_partial(&engine))
    } else {
        html_response(pages::listings_page(&engine))
    }
}

pub fn listing_detail(id: &str, state: &AppState) -> ResultResp {
    let listing = state
        .db
        .with_conn(|conn| find_listing(conn, id))?
        .ok_or(ServerError::NotFound)?;
    html_response(pages::listing_detail_page(&listing))
}

pub fn about() -> ResultResp {
    html_response(pages::about_page())
}

/// `?subject=` pre-fills the form (used by the listing "Enquire" link).
pub fn contact(req: &Request) -> ResultResp {
    let form = ContactForm {
        subject: parse_query(req).remove("subject").unwrap_or_default(),
        ..ContactForm::default()
    };
    html_response(pages::contact_page(pages::contact_form(
        &form,
        &FieldErrors::new(),
    )))
}

pub fn submit_contact(req: Request, state: &AppState) -> ResultResp {
    let htmx = is_htmx(&req);
    let raw = read_form(req)?;
    let form = ContactForm {
        name: field(&raw, "name"),
        email: field(&raw, "email"),
        subject: field(&raw, "subject"),
        message: field(&raw, "message"),
    };

    let body = match form.validate() {
        Ok(enquiry) => {
            let id = state
                .db
                .with_conn(|conn| insert_enquiry(conn, &enquiry, unix_now()))?;
            info!(enquiry_id = id, email = %enquiry.email, "enquiry received");
            pages::contact_thanks()
        }
        Err(errors) => pages::contact_form(&form, &errors),
    };

    if htmx {
        html_response(body)
    } else {
        html_response(pages::contact_page(body))
    }
}

pub fn recommendations(state: &AppState) -> ResultResp {
    html_response(pages::recommendations_page(
        &RecommendationForm::default(),
        &FieldErrors::new(),
        &RecommendationView::Empty,
        state.recommender.is_some(),
    ))
}

pub fn submit_recommendations(req: Request, state: &AppState) -> ResultResp {
    let raw = read_form(req)?;
    let form = RecommendationForm {
        location: field(&raw, "location"),
        area: field(&raw, "area"),
        price: field(&raw, "price"),
    };
    let enabled = state.recommender.is_some();

    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            return html_response(pages::recommendations_page(
                &form,
                &errors,
                &RecommendationView::Empty,
                enabled,
            ))
        }
    };

    let Some(recommender) = state.recommender.as_deref() else {
        state
            .db
            .with_conn(|conn| record_quotation_request(conn, &input, 0, unix_now()))?;
        return html_response(pages::recommendations_page(
            &form,
            &FieldErrors::new(),
            &RecommendationView::Unavailable,
            enabled,
        ));
    };

    let catalog = state.db.with_conn(|conn| load_all_listings(conn))?;
    let outcome = recommender.recommend(&input, &catalog);

    let count = outcome.as_ref().map_or(0, |out| out.recommendations.len());
    state
        .db
        .with_conn(|conn| record_quotation_request(conn, &input, count, unix_now()))?;

    let view = match &outcome {
        Ok(out) => RecommendationView::Results(
            out.recommendations
                .iter()
                .map(|rec| (rec, catalog.iter().find(|l| l.id == rec.land_id)))
                .collect(),
        ),
        Err(e) => {
            warn!(error = %e, "recommendation failed");
            RecommendationView::Failed
        }
    };

    html_response(pages::recommendations_page(
        &form,
        &FieldErrors::new(),
        &view,
        enabled,
    ))
}

pub fn sitemap(state: &AppState) -> ResultResp {
    let history = state.db.with_conn(|conn| list_listing_history(conn))?;
    let xml = build_sitemap(&state.config.base_url, &history, unix_now());
    text_response("application/xml; charset=utf-8", xml)
}
