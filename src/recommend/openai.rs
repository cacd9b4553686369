use std::fmt::Write as _;
use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{RecommendationInput, RecommendationOutput, Recommender};
use crate::config::OpenAiConfig;
use crate::domain::Listing;
use crate::errors::ServerError;

const SYSTEM_PROMPT: &str = "You are an expert real estate agent specializing in land properties. \
Based on the user's preferences for location, area, and price, you recommend land listings \
from the available inventory. Reply with JSON only.";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message>,
    response_format: ResponseFormat,
    temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Message,
}

/// Chat-completions client; works with any OpenAI-compatible endpoint.
pub struct OpenAiRecommender {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiRecommender {
    pub fn from_config(cfg: &OpenAiConfig) -> Result<Self, ServerError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ServerError::Upstream(format!("build http client failed: {e}")))?;

        Ok(Self {
            client,
            api_key: cfg.api_key.clone(),
            base_url: cfg.base_url.clone(),
            model: cfg.model.clone(),
        })
    }
}

impl Recommender for OpenAiRecommender {
    fn recommend(
        &self,
        input: &RecommendationInput,
        catalog: &[Listing],
    ) -> Result<RecommendationOutput, ServerError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                Message {
                    role: "system".into(),
                    content: SYSTEM_PROMPT.into(),
                },
                Message {
                    role: "user".into(),
                    content: build_user_prompt(input, catalog),
                },
            ],
            response_format: ResponseFormat {
                kind: "json_object",
            },
            temperature: 0.2,
        };

        let resp = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .map_err(|e| {
                warn!(error = %e, "recommendation request failed");
                ServerError::Upstream(format!("recommendation request failed: {e}"))
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            warn!(%status, body = %body, "recommendation API error");
            return Err(ServerError::Upstream(format!("model API returned {status}")));
        }

        let chat: ChatResponse = resp
            .json()
            .map_err(|e| ServerError::Upstream(format!("decode chat response failed: {e}")))?;

        let content = chat
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| ServerError::Upstream("model returned no choices".into()))?;

        let output = parse_content(&content)?;
        debug!(model = %self.model, count = output.recommendations.len(), "recommendations received");
        Ok(output)
    }
}

fn build_user_prompt(input: &RecommendationInput, catalog: &[Listing]) -> String {
    let mut prompt = String::new();
    let _ = writeln!(prompt, "User Preferences:");
    let _ = writeln!(prompt, "- Location: {}", input.location);
    let _ = writeln!(prompt, "- Area: {}", input.area);
    let _ = writeln!(prompt, "- Price: {}", input.price);
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "Available listings:");
    for l in catalog {
        let _ = writeln!(
            prompt,
            "- id: {}; name: {}; location: {}; area: {} acres; price: ${}",
            l.id, l.name, l.location, l.area, l.price
        );
    }
    let _ = writeln!(prompt);
    let _ = write!(
        prompt,
        "Respond with a JSON object of the form \
         {{\"recommendations\": [{{\"landId\": string, \"description\": string, \"suitabilityScore\": number between 0 and 1}}]}}. \
         Use landId values from the available listings only."
    );
    prompt
}

fn parse_content(content: &str) -> Result<RecommendationOutput, ServerError> {
    let output: RecommendationOutput = serde_json::from_str(content.trim())
        .map_err(|e| ServerError::Upstream(format!("model returned unexpected JSON: {e}")))?;
    Ok(output.normalized())
}
