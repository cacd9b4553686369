use maud::{html, Markup};

pub mod format;
pub mod land_card;

pub use format::{format_area, format_price, format_timestamp};
pub use land_card::land_card;

use crate::domain::validation::FieldErrors;

pub fn stat_card(title: &str, value: i64, note: &str) -> Markup {
    html! {
        div class="card stat" {
            h3 class="stat-title" { (title) }
            div class="stat-value" { (value) }
            p class="muted small" { (note) }
        }
    }
}

/// Inline message under a form input, if that field failed validation.
pub fn field_error(errors: &FieldErrors, field: &str) -> Markup {
    html! {
        @if let Some(msg) = errors.get(field) {
            p class="field-error" { (msg) }
        }
    }
}
