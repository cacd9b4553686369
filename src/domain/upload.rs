// src/domain/upload.rs

use url::Url;

use crate::domain::criteria::parse_number;
use crate::domain::validation::FieldErrors;

pub const SQFT_PER_ACRE: f64 = 43_560.0;
pub const CENTS_PER_ACRE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaUnit {
    Sqft,
    Cents,
}

impl AreaUnit {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "sqft" => Some(AreaUnit::Sqft),
            "cents" => Some(AreaUnit::Cents),
            _ => None,
        }
    }

    pub fn per_acre(self) -> f64 {
        match self {
            AreaUnit::Sqft => SQFT_PER_ACRE,
            AreaUnit::Cents => CENTS_PER_ACRE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceUnit {
    PerSqft,
    PerCent,
}

impl PriceUnit {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "per-sqft" => Some(PriceUnit::PerSqft),
            "per-cent" => Some(PriceUnit::PerCent),
            _ => None,
        }
    }

    /// The area unit this price is quoted against.
    pub fn area_unit(self) -> AreaUnit {
        match self {
            PriceUnit::PerSqft => AreaUnit::Sqft,
            PriceUnit::PerCent => AreaUnit::Cents,
        }
    }
}

/// Raw admin upload form, every field as submitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadForm {
    pub title: String,
    pub area: String,
    pub area_unit: String,
    pub district: String,
    pub taluk: String,
    pub village: String,
    pub price: String,
    pub price_unit: String,
    pub description: String,
    /// One image URL per line.
    pub photos: String,
}

/// A validated upload, converted to what the public site shows:
/// area in acres and a total price.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingDraft {
    pub name: String,
    pub location: String,
    pub area_acres: f64,
    pub total_price: f64,
    pub description: String,
    pub photos: Vec<String>,
}

impl UploadForm {
    pub fn validate(&self) -> Result<ListingDraft, FieldErrors> {
        let mut errors = FieldErrors::new();

        errors.min_chars("title", &self.title, 5, "Title must be at least 5 characters.");

        let area = parse_number(&self.area).filter(|a| *a > 0.0);
        if area.is_none() {
            errors.add("area", "Area must be a positive number.");
        }
        let area_unit = AreaUnit::parse(&self.area_unit);
        if area_unit.is_none() {
            errors.add("area_unit", "Choose sq.ft or cents.");
        }

        errors.min_chars("district", &self.district, 3, "District is required.");
        errors.min_chars("taluk", &self.taluk, 3, "Taluk is required.");
        errors.min_chars("village", &self.village, 3, "Village is required.");

        let price = parse_number(&self.price).filter(|p| *p > 0.0);
        if price.is_none() {
            errors.add("price", "Price must be a positive number.");
        }
        let price_unit = PriceUnit::parse(&self.price_unit);
        if price_unit.is_none() {
            errors.add("price_unit", "Choose per sq.ft or per cent.");
        }

        errors.min_chars(
            "description",
            &self.description,
            20,
            "Description must be at least 20 characters.",
        );

        let photos = parse_photo_urls(&self.photos, &mut errors);

        match (area, area_unit, price, price_unit) {
            (Some(area), Some(area_unit), Some(price), Some(price_unit)) if errors.is_empty() => {
                let area_acres = area / area_unit.per_acre();
                let priced_area = area_acres * price_unit.area_unit().per_acre();
                Ok(ListingDraft {
                    name: self.title.trim().to_string(),
                    location: format!(
                        "{}, {}, {}",
                        self.village.trim(),
                        self.taluk.trim(),
                        self.district.trim()
                    ),
                    area_acres,
                    total_price: (price * priced_area).round(),
                    description: self.description.trim().to_string(),
                    photos,
                })
            }
            _ => Err(errors),
        }
    }
}

fn parse_photo_urls(raw: &str, errors: &mut FieldErrors) -> Vec<String> {
    let mut photos = Vec::new();
    for line in raw.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match Url::parse(line) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {
                photos.push(url.to_string());
            }
            _ => {
                errors.add("photos", format!("Not a valid image URL: {line}"));
            }
        }
    }
    if photos.is_empty() {
        errors.add("photos", "At least one image is required.");
    }
    photos
}
