use crate::db::enquiries::count_enquiries_since;
use crate::db::listings::{count_distinct_locations, count_listings};
use crate::db::quotations::count_quotations_since;
use crate::errors::ServerError;
use rusqlite::Connection;
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_listings: i64,
    pub distinct_locations: i64,
    pub quotations_total: i64,
    pub quotations_this_month: i64,
    pub enquiries_total: i64,
    pub enquiries_this_month: i64,
}

/// Start of the calendar month (UTC) containing `now`.
pub fn start_of_month(now: i64) -> i64 {
    let dt = OffsetDateTime::from_unix_timestamp(now).unwrap_or_else(|_| OffsetDateTime::now_utc());

    // Day 1 is valid for every month, so the fallback is just type safety
    dt.replace_day(1)
        .unwrap_or(dt)
        .replace_time(time::Time::MIDNIGHT)
        .unix_timestamp()
}

pub fn load_dashboard_stats(conn: &Connection, now: i64) -> Result<DashboardStats, ServerError> {
    let month = start_of_month(now);

    Ok(DashboardStats {
        total_listings: count_listings(conn)?,
        distinct_locations: count_distinct_locations(conn)?,
        quotations_total: count_quotations_since(conn, i64::MIN)?,
        quotations_this_month: count_quotations_since(conn, month)?,
        enquiries_total: count_enquiries_since(conn, i64::MIN)?,
        enquiries_this_month: count_enquiries_since(conn, month)?,
    })
}
