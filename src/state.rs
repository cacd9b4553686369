use crate::config::Config;
use crate::db::Database;
use crate::mailer::BrevoMailer;
use crate::recommend::Recommender;

/// Everything a request handler needs, shared by all worker threads.
pub struct AppState {
    pub db: Database,
    pub config: Config,
    /// None when no model key is configured.
    pub recommender: Option<Box<dyn Recommender>>,
    /// None when mail is not configured; magic links are logged instead.
    pub mailer: Option<BrevoMailer>,
}

impl AppState {
    pub fn new(db: Database, config: Config) -> Self {
        Self {
            db,
            config,
            recommender: None,
            mailer: None,
        }
    }

    pub fn with_recommender(mut self, recommender: Box<dyn Recommender>) -> Self {
        self.recommender = Some(recommender);
        self
    }

    pub fn with_mailer(mut self, mailer: BrevoMailer) -> Self {
        self.mailer = Some(mailer);
        self
    }
}
