//! Land recommendations from a text-generation model.
//!
//! The model is opaque: [`RecommendationInput`] plus the current catalog goes
//! in, a [`RecommendationOutput`] comes back. Everything here is about shaping
//! that exchange and refusing output we can't render.

pub mod openai;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::validation::FieldErrors;
use crate::domain::Listing;
use crate::errors::ServerError;

pub use openai::OpenAiRecommender;

/// Free-text buyer preferences, exactly as typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationInput {
    pub location: String,
    pub area: String,
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub land_id: String,
    pub description: String,
    /// 0.0 ..= 1.0
    pub suitability_score: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationOutput {
    pub recommendations: Vec<Recommendation>,
}

pub trait Recommender: Send + Sync {
    fn recommend(
        &self,
        input: &RecommendationInput,
        catalog: &[Listing],
    ) -> Result<RecommendationOutput, ServerError>;
}

impl RecommendationOutput {
    /// Clamp scores into range and order best match first.
    pub fn normalized(mut self) -> Self {
        for rec in &mut self.recommendations {
            let score = rec.suitability_score;
            if !(0.0..=1.0).contains(&score) {
                warn!(land_id = %rec.land_id, score, "suitability score out of range, clamping");
                rec.suitability_score = if score.is_nan() { 0.0 } else { score.clamp(0.0, 1.0) };
            }
        }
        self.recommendations
            .sort_by(|a, b| b.suitability_score.total_cmp(&a.suitability_score));
        self
    }
}

impl Recommendation {
    /// Whole-number percentage for display.
    pub fn score_percent(&self) -> u32 {
        (self.suitability_score * 100.0).round() as u32
    }

    /// Title-cased id, used when the id doesn't match a known listing.
    pub fn fallback_title(&self) -> String {
        self.land_id
            .split('-')
            .filter(|w| !w.is_empty())
            .map(|w| {
                let mut chars = w.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Raw preference form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecommendationForm {
    pub location: String,
    pub area: String,
    pub price: String,
}

impl RecommendationForm {
    pub fn validate(&self) -> Result<RecommendationInput, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.min_chars("location", &self.location, 3, "Location should be at least 3 characters.");
        errors.min_chars("area", &self.area, 1, "Please specify an area.");
        errors.min_chars("price", &self.price, 1, "Please specify a price range.");

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(RecommendationInput {
            location: self.location.trim().to_string(),
            area: self.area.trim().to_string(),
            price: self.price.trim().to_string(),
        })
    }
}
