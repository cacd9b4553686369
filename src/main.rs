use crate::config::Config;
use crate::db::listings::seed_listings_if_empty;
use crate::db::{init_db, Database};
use crate::mailer::BrevoMailer;
use crate::recommend::OpenAiRecommender;
use crate::responses::error_response;
use crate::router::handle;
use crate::state::AppState;
use astra::Server;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod auth;
mod config;
mod db;
mod domain;
mod errors;
mod handlers;
mod mailer;
mod recommend;
mod responses;
mod router;
mod sitemap;
mod spreadsheets;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "land_site=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let db = Database::new(config.database_path.clone());
    if let Err(e) = init_db(&db) {
        error!(error = %e, "database initialization failed");
        std::process::exit(1);
    }

    if config.seed_sample_data {
        let now = router::unix_now();
        match db.with_conn(|conn| seed_listings_if_empty(conn, &domain::fixtures::sample_listings(), now)) {
            Ok(0) => {}
            Ok(n) => info!(count = n, "seeded sample listings"),
            Err(e) => warn!(error = %e, "seeding sample listings failed"),
        }
    }

    if config.admin_emails.is_empty() {
        warn!("ADMIN_EMAILS is empty; nobody can sign in to the admin area");
    }

    let addr = config.bind_addr;
    let max_workers = config.max_workers;
    let mut state = AppState::new(db, config);

    if let Some(openai) = state.config.openai.clone() {
        match OpenAiRecommender::from_config(&openai) {
            Ok(r) => {
                info!(model = %openai.model, "recommendations enabled");
                state = state.with_recommender(Box::new(r));
            }
            Err(e) => warn!(error = %e, "recommendations disabled"),
        }
    } else {
        info!("OPENAI_API_KEY not set; recommendations disabled");
    }

    if let Some(mail) = state.config.mail.clone() {
        match BrevoMailer::from_config(&mail) {
            Ok(m) => state = state.with_mailer(m),
            Err(e) => warn!(error = %e, "mailer disabled; magic links will be logged"),
        }
    }

    info!(%addr, max_workers, "starting server");

    let result = Server::bind(&addr)
        .max_workers(max_workers)
        .serve(move |req, _info| match handle(req, &state) {
            Ok(resp) => resp,
            Err(err) => error_response(err),
        });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("server shut down");
}
