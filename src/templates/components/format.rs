use chrono::{DateTime, Utc};

/// Whole dollars with thousands separators: `$2,500,000`.
pub fn format_price(price: f64) -> String {
    format!("${}", group_thousands(price.round() as i64))
}

/// At most two decimals, without trailing zeros: `50`, `2.5`, `0.23`.
pub fn format_area(acres: f64) -> String {
    let fixed = format!("{acres:.2}");
    match fixed.split_once('.') {
        Some((whole, "00")) => whole.to_string(),
        Some((whole, frac)) => format!("{whole}.{}", frac.trim_end_matches('0')),
        None => fixed,
    }
}

/// UTC `YYYY-MM-DD HH:MM`.
pub fn format_timestamp(ts: i64) -> String {
    DateTime::<Utc>::from_timestamp(ts, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}

fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
