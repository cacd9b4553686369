// src/config.rs

use std::env;
use std::net::SocketAddr;

use dotenvy::dotenv;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} has an invalid value: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub database_path: String,
    /// Used for absolute links (sitemap, emails). No trailing slash.
    pub base_url: String,
    pub max_workers: usize,
    /// Lowercased emails allowed into the CRM.
    pub admin_emails: Vec<String>,
    pub seed_sample_data: bool,
    pub openai: Option<OpenAiConfig>,
    pub mail: Option<MailConfig>,
}

#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

#[derive(Debug, Clone)]
pub struct MailConfig {
    pub brevo_api_key: String,
    pub sender_email: String,
    pub sender_name: String,
}

impl Config {
    /// Load configuration from the process environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        let _ = dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Unset and blank values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bind_addr: SocketAddr = parse_var("BIND_ADDR", get("BIND_ADDR"), "127.0.0.1:3000".parse().ok())?;
        let max_workers: usize = parse_var("MAX_WORKERS", get("MAX_WORKERS"), Some(8))?;
        let seed_sample_data = match get("SEED_SAMPLE_DATA").as_deref() {
            None => false,
            Some("1" | "true" | "yes") => true,
            Some("0" | "false" | "no") => false,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    var: "SEED_SAMPLE_DATA",
                    value: other.to_string(),
                })
            }
        };

        let admin_emails = get("ADMIN_EMAILS")
            .map(|raw| {
                raw.split(',')
                    .map(|e| e.trim().to_lowercase())
                    .filter(|e| !e.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let openai = get("OPENAI_API_KEY").map(|api_key| OpenAiConfig {
            api_key,
            base_url: get("OPENAI_BASE_URL")
                .unwrap_or_else(|| "https://api.openai.com/v1".to_string())
                .trim_end_matches('/')
                .to_string(),
            model: get("OPENAI_MODEL").unwrap_or_else(|| "gpt-4o-mini".to_string()),
        });

        let mail = get("BREVO_API_KEY").map(|brevo_api_key| MailConfig {
            brevo_api_key,
            sender_email: get("MAIL_SENDER_EMAIL").unwrap_or_else(|| "no-reply@localhost".to_string()),
            sender_name: get("MAIL_SENDER_NAME").unwrap_or_else(|| "RR Group".to_string()),
        });

        Ok(Self {
            bind_addr,
            database_path: get("DATABASE_PATH").unwrap_or_else(|| "land_site.sqlite3".to_string()),
            base_url: get("BASE_URL")
                .unwrap_or_else(|| "http://localhost:3000".to_string())
                .trim_end_matches('/')
                .to_string(),
            max_workers,
            admin_emails,
            seed_sample_data,
            openai,
            mail,
        })
    }

    pub fn is_admin_email(&self, email: &str) -> bool {
        let email = email.trim().to_lowercase();
        self.admin_emails.iter().any(|admin| *admin == email)
    }
}

fn parse_var<T: std::str::FromStr>(
    var: &'static str,
    raw: Option<String>,
    default: Option<T>,
) -> Result<T, ConfigError> {
    match (raw, default) {
        (Some(value), _) => value.parse().map_err(|_| ConfigError::Invalid { var, value }),
        (None, Some(default)) => Ok(default),
        (None, None) => Err(ConfigError::Invalid {
            var,
            value: String::new(),
        }),
    }
}
