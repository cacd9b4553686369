// src/mailer.rs

use reqwest::blocking::Client;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

use crate::config::MailConfig;

const BREVO_SEND_URL: &str = "https://api.brevo.com/v3/smtp/email";

#[derive(Debug, Error)]
pub enum MailerError {
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("API error: {0}")]
    ApiError(String),
}

pub struct BrevoMailer {
    api_key: String,
    sender_email: String,
    sender_name: String,
    client: Client,
}

#[derive(Serialize)]
struct BrevoSender<'a> {
    name: &'a str,
    email: &'a str,
}

#[derive(Serialize)]
struct BrevoRecipient<'a> {
    email: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BrevoPayload<'a> {
    sender: BrevoSender<'a>,
    to: Vec<BrevoRecipient<'a>>,
    subject: &'a str,
    html_content: String,
}

impl BrevoMailer {
    pub fn from_config(cfg: &MailConfig) -> Result<Self, MailerError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| MailerError::RequestFailed(e.to_string()))?;

        Ok(Self {
            api_key: cfg.brevo_api_key.clone(),
            sender_email: cfg.sender_email.clone(),
            sender_name: cfg.sender_name.clone(),
            client,
        })
    }

    /// `magic_link` must be absolute; mail clients can't resolve relative links.
    pub fn send_magic_link(&self, recipient_email: &str, magic_link: &str) -> Result<(), MailerError> {
        let html_content = magic_link_html(&self.sender_name, magic_link);
        self.send(recipient_email, "Your admin sign-in link", html_content)
    }

    fn send(&self, recipient_email: &str, subject: &str, html_content: String) -> Result<(), MailerError> {
        let payload = BrevoPayload {
            sender: BrevoSender {
                name: &self.sender_name,
                email: &self.sender_email,
            },
            to: vec![BrevoRecipient {
                email: recipient_email,
            }],
            subject,
            html_content,
        };

        let resp = self
            .client
            .post(BREVO_SEND_URL)
            .header("api-key", &self.api_key)
            .json(&payload)
            .send()
            .map_err(|e| MailerError::RequestFailed(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let error_body = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            return Err(MailerError::ApiError(format!("{status}: {error_body}")));
        }

        Ok(())
    }
}

fn magic_link_html(site_name: &str, magic_link: &str) -> String {
    maud::html! {
        h1 { "Sign in to " (site_name) " admin" }
        p { "Click the link below to open the CRM. This link expires in 15 minutes and works once." }
        p { a href=(magic_link) { "Sign in" } }
        p { "If you did not request this link, you can safely ignore this email." }
    }
    .into_string()
}
