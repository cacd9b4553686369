use crate::errors::ServerError;
use crate::recommend::RecommendationInput;
use rusqlite::{params, Connection};

/// A logged recommendation request; the CRM reports these as quotation requests.
#[derive(Debug, Clone)]
pub struct QuotationRow {
    pub id: i64,
    pub location: String,
    pub area: String,
    pub price: String,
    pub recommendation_count: i64,
    pub created_at: i64,
}

pub fn record_quotation_request(
    conn: &Connection,
    input: &RecommendationInput,
    recommendation_count: usize,
    now: i64,
) -> Result<i64, ServerError> {
    conn.execute(
        "insert into quotation_requests (location, area, price, recommendation_count, created_at)
         values (?, ?, ?, ?, ?)",
        params![
            input.location,
            input.area,
            input.price,
            recommendation_count as i64,
            now
        ],
    )
    .map_err(|e| ServerError::DbError(format!("record quotation request failed: {e}")))?;
    Ok(conn.last_insert_rowid())
}

pub fn count_quotations_since(conn: &Connection, since: i64) -> Result<i64, ServerError> {
    conn.query_row(
        "select count(*) from quotation_requests where created_at >= ?",
        params![since],
        |r| r.get(0),
    )
    .map_err(|e| ServerError::DbError(format!("count quotation requests failed: {e}")))
}

pub fn list_quotations(conn: &Connection) -> Result<Vec<QuotationRow>, ServerError> {
    let mut stmt = conn
        .prepare(
            "select id, location, area, price, recommendation_count, created_at
             from quotation_requests
             order by created_at desc, id desc",
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map([], |row| {
            Ok(QuotationRow {
                id: row.get(0)?,
                location: row.get(1)?,
                area: row.get(2)?,
                price: row.get(3)?,
                recommendation_count: row.get(4)?,
                created_at: row.get(5)?,
            })
        })
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
    }
    Ok(out)
}
