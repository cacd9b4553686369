use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::domain::listing::{slugify, Listing};
use crate::domain::upload::ListingDraft;
use crate::errors::ServerError;

const LISTING_COLUMNS: &str = "id, name, location, area, price, description, photos";

fn listing_from_row(row: &Row<'_>) -> rusqlite::Result<Listing> {
    let photos_json: String = row.get(6)?;
    let photos: Vec<String> = serde_json::from_str(&photos_json)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e)))?;

    Ok(Listing {
        id: row.get(0)?,
        name: row.get(1)?,
        location: row.get(2)?,
        area: row.get(3)?,
        price: row.get(4)?,
        description: row.get(5)?,
        photos,
    })
}

/// Every listing, oldest first. This is the full set handed to the filter engine.
pub fn load_all_listings(conn: &Connection) -> Result<Vec<Listing>, ServerError> {
    let mut stmt = conn
        .prepare(&format!(
            "select {LISTING_COLUMNS} from listings order by created_at, rowid"
        ))
        .map_err(|e| ServerError::DbError(format!("prepare listings failed: {e}")))?;

    let rows = stmt
        .query_map([], listing_from_row)
        .map_err(|e| ServerError::DbError(format!("query listings failed: {e}")))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| ServerError::DbError(format!("read listing failed: {e}")))?);
    }
    Ok(out)
}

pub fn find_listing(conn: &Connection, id: &str) -> Result<Option<Listing>, ServerError> {
    conn.query_row(
        &format!("select {LISTING_COLUMNS} from listings where id = ?"),
        params![id],
        listing_from_row,
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("select listing failed: {e}")))
}

/// A listing plus when it was stored, for the admin history table and export.
#[derive(Debug, Clone)]
pub struct ListingHistoryRow {
    pub listing: Listing,
    pub created_at: i64,
}

/// Newest first.
pub fn list_listing_history(conn: &Connection) -> Result<Vec<ListingHistoryRow>, ServerError> {
    let mut stmt = conn
        .prepare(&format!(
            "select {LISTING_COLUMNS}, created_at from listings order by created_at desc, rowid desc"
        ))
        .map_err(|e| ServerError::DbError(format!("prepare listing history failed: {e}")))?;

    let rows = stmt
        .query_map([], |row| {
            Ok(ListingHistoryRow {
                listing: listing_from_row(row)?,
                created_at: row.get(7)?,
            })
        })
        .map_err(|e| ServerError::DbError(format!("query listing history failed: {e}")))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| ServerError::DbError(format!("read listing failed: {e}")))?);
    }
    Ok(out)
}

pub fn count_listings(conn: &Connection) -> Result<i64, ServerError> {
    conn.query_row("select count(*) from listings", [], |r| r.get(0))
        .map_err(|e| ServerError::DbError(format!("count listings failed: {e}")))
}

pub fn count_distinct_locations(conn: &Connection) -> Result<i64, ServerError> {
    conn.query_row("select count(distinct location) from listings", [], |r| r.get(0))
        .map_err(|e| ServerError::DbError(format!("count locations failed: {e}")))
}

pub fn insert_listing(conn: &Connection, listing: &Listing, now: i64) -> Result<(), ServerError> {
    let photos = serde_json::to_string(&listing.photos)
        .map_err(|e| ServerError::DbError(format!("encode photos failed: {e}")))?;

    conn.execute(
        r#"
        insert into listings (id, name, location, area, price, description, photos, created_at)
        values (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
        params![
            listing.id,
            listing.name,
            listing.location,
            listing.area,
            listing.price,
            listing.description,
            photos,
            now
        ],
    )
    .map_err(|e| ServerError::DbError(format!("insert listing failed: {e}")))?;
    Ok(())
}

/// Slug for `title` that no stored listing uses yet: "aspen-meadows", "aspen-meadows-2", ...
pub fn unique_slug(conn: &Connection, title: &str) -> Result<String, ServerError> {
    let base = slugify(title);
    let mut candidate = base.clone();
    let mut n = 2;

    loop {
        let taken: bool = conn
            .query_row(
                "select exists(select 1 from listings where id = ?)",
                params![candidate],
                |r| r.get(0),
            )
            .map_err(|e| ServerError::DbError(format!("check slug failed: {e}")))?;
        if !taken {
            return Ok(candidate);
        }
        candidate = format!("{base}-{n}");
        n += 1;
    }
}

/// Store an uploaded listing under a fresh slug and return it.
pub fn create_listing_from_draft(
    conn: &mut Connection,
    draft: ListingDraft,
    now: i64,
) -> Result<Listing, ServerError> {
    let tx = conn
        .transaction()
        .map_err(|e| ServerError::DbError(format!("begin tx failed: {e}")))?;

    let listing = Listing {
        id: unique_slug(&tx, &draft.name)?,
        name: draft.name,
        location: draft.location,
        area: draft.area_acres,
        price: draft.total_price,
        description: draft.description,
        photos: draft.photos,
    };
    insert_listing(&tx, &listing, now)?;

    tx.commit()
        .map_err(|e| ServerError::DbError(format!("commit tx failed: {e}")))?;
    Ok(listing)
}

/// Insert `listings` only when the table is empty. Returns how many were inserted.
pub fn seed_listings_if_empty(
    conn: &mut Connection,
    listings: &[Listing],
    now: i64,
) -> Result<usize, ServerError> {
    if count_listings(conn)? > 0 {
        return Ok(0);
    }

    let tx = conn
        .transaction()
        .map_err(|e| ServerError::DbError(format!("begin tx failed: {e}")))?;
    // created_at offsets keep the fixture order stable
    for (i, listing) in listings.iter().enumerate() {
        insert_listing(&tx, listing, now + i as i64)?;
    }
    tx.commit()
        .map_err(|e| ServerError::DbError(format!("commit tx failed: {e}")))?;

    Ok(listings.len())
}
