// src/db/enquiries.rs
use crate::domain::enquiry::NewEnquiry;
use crate::errors::ServerError;
use rusqlite::{params, Connection};

#[derive(Debug, Clone)]
pub struct EnquiryRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: i64,
}

pub fn insert_enquiry(conn: &Connection, enquiry: &NewEnquiry, now: i64) -> Result<i64, ServerError> {
    conn.execute(
        "insert into enquiries (name, email, subject, message, created_at) values (?, ?, ?, ?, ?)",
        params![enquiry.name, enquiry.email, enquiry.subject, enquiry.message, now],
    )
    .map_err(|e| ServerError::DbError(format!("insert enquiry failed: {e}")))?;
    Ok(conn.last_insert_rowid())
}

pub fn count_enquiries_since(conn: &Connection, since: i64) -> Result<i64, ServerError> {
    conn.query_row(
        "select count(*) from enquiries where created_at >= ?",
        params![since],
        |r| r.get(0),
    )
    .map_err(|e| ServerError::DbError(format!("count enquiries failed: {e}")))
}

/// Newest first. `limit = None` returns everything (used by the export).
pub fn list_enquiries(conn: &Connection, limit: Option<i64>) -> Result<Vec<EnquiryRow>, ServerError> {
    let mut stmt = conn
        .prepare(
            "select id, name, email, subject, message, created_at
             from enquiries
             order by created_at desc, id desc
             limit ?",
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    // sqlite treats a negative limit as no limit
    let rows = stmt
        .query_map(params![limit.unwrap_or(-1)], |row| {
            Ok(EnquiryRow {
                id: row.get(0)?,
                name: row.get(1)?,
                email: row.get(2)?,
                subject: row.get(3)?,
                message: row.get(4)?,
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
