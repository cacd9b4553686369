use chrono::{DateTime, Utc};

use crate::db::listings::ListingHistoryRow;

const STATIC_ROUTES: [&str; 6] = [
    "",
    "/listings",
    "/recommendations",
    "/about",
    "/contact",
    "/admin/login",
];

fn w3c_date(ts: i64) -> String {
    DateTime::<Utc>::from_timestamp(ts, 0)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Static pages get today's date as lastmod, listings the day they were added.
pub fn build_sitemap(base_url: &str, listings: &[ListingHistoryRow], now: i64) -> String {
    let today = w3c_date(now);
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );

    let mut push = |loc: String, lastmod: &str| {
        xml.push_str("  <url><loc>");
        xml.push_str(&escape_xml(&loc));
        xml.push_str("</loc><lastmod>");
        xml.push_str(lastmod);
        xml.push_str("</lastmod></url>\n");
    };

    for route in STATIC_ROUTES {
        let loc = if route.is_empty() {
            format!("{base_url}/")
        } else {
            format!("{base_url}{route}")
        };
        push(loc, &today);
    }
    for row in listings {
        push(
            format!("{base_url}/listings/{}", row.listing.id),
            &w3c_date(row.created_at),
        );
    }

    xml.push_str("</urlset>\n");
    xml
}
