use serde::{Deserialize, Serialize};

/// A single land parcel as shown on the public site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// URL-friendly slug, e.g. "golden-valley-estate".
    pub id: String,
    pub name: String,
    pub location: String,
    /// Acres.
    pub area: f64,
    /// US dollars.
    pub price: f64,
    pub description: String,
    pub photos: Vec<String>,
}

impl Listing {
    pub fn cover_photo(&self) -> Option<&str> {
        self.photos.first().map(String::as_str)
    }

    /// First `max_chars` characters of the description, with an ellipsis if cut.
    pub fn summary(&self, max_chars: usize) -> String {
        let mut chars = self.description.chars();
        let head: String = chars.by_ref().take(max_chars).collect();
        if chars.next().is_some() {
            format!("{}...", head.trim_end())
        } else {
            head
        }
    }
}

/// Lowercase, ASCII alphanumerics separated by single dashes.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        "listing".to_string()
    } else {
        slug
    }
}
