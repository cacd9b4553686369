// src/db/auth.rs
use rusqlite::{params, Connection, OptionalExtension};

use crate::errors::ServerError;

#[derive(Debug, Clone)]
pub struct MagicLinkRow {
    pub id: i64,
    pub user_id: i64,
    pub expires_at: i64,
    pub used_at: Option<i64>,
}

/// Insert a user if they don't exist, then return the user id.
/// Email should already be normalized by caller (trim/lowercase).
pub fn get_or_create_user(conn: &Connection, email: &str, now: i64) -> Result<i64, ServerError> {
    conn.execute(
        "insert or ignore into users (email, created_at) values (?, ?)",
        params![email, now],
    )
    .map_err(|e| ServerError::DbError(format!("insert user failed: {e}")))?;

    let id: i64 = conn
        .query_row(
            "select id from users where email = ?",
            params![email],
            |row| row.get(0),
        )
        .map_err(|e| ServerError::DbError(format!("select user id failed: {e}")))?;

    Ok(id)
}

pub fn find_user_email(conn: &Connection, user_id: i64) -> Result<String, ServerError> {
    conn.query_row(
        "select email from users where id = ?",
        params![user_id],
        |r| r.get(0),
    )
    .map_err(|e| ServerError::DbError(format!("select user email failed: {e}")))
}

pub fn touch_last_login(conn: &Connection, user_id: i64, now: i64) -> Result<(), ServerError> {
    conn.execute(
        "update users set last_login_at = ? where id = ?",
        params![now, user_id],
    )
    .map_err(|e| ServerError::DbError(format!("update last_login_at failed: {e}")))?;
    Ok(())
}

/// Insert a magic link row (token_hash should be SHA-256 bytes).
pub fn insert_magic_link(
    conn: &Connection,
    user_id: i64,
    token_hash: &[u8],
    created_at: i64,
    expires_at: i64,
) -> Result<(), ServerError> {
    conn.execute(
        "insert into magic_links (user_id, token_hash, created_at, expires_at) values (?, ?, ?, ?)",
        params![user_id, token_hash, created_at, expires_at],
    )
    .map_err(|e| ServerError::DbError(format!("insert magic link failed: {e}")))?;
    Ok(())
}

/// Consume a magic link token hash:
/// - must exist
/// - must be unexpired (expires_at > now)
/// - must be unused (used_at is null)
/// If valid, sets used_at=now and returns Some(user_id). Otherwise returns Ok(None).
///
/// Runs in a transaction so a link can only be used once.
pub fn consume_magic_link(
    conn: &mut Connection,
    token_hash: &[u8],
    now: i64,
) -> Result<Option<i64>, ServerError> {
    let tx = conn
        .transaction()
        .map_err(|e| ServerError::DbError(format!("begin tx failed: {e}")))?;

    let row: Option<MagicLinkRow> = tx
        .query_row(
            "select id, user_id, expires_at, used_at
             from magic_links
             where token_hash = ?",
            params![token_hash],
            |r| {
                Ok(MagicLinkRow {
                    id: r.get(0)?,
                    user_id: r.get(1)?,
                    expires_at: r.get(2)?,
                    used_at: r.get(3)?,
                })
            },
        )
        .optional()
        .map_err(|e| ServerError::DbError(format!("select magic link in tx failed: {e}")))?;

    let Some(ml) = row else {
        tx.rollback().ok();
        return Ok(None);
    };

    if ml.used_at.is_some() || ml.expires_at <= now {
        tx.rollback().ok();
        return Ok(None);
    }

    // Guard used_at IS NULL so only one consumer wins
    let updated = tx
        .execute(
            "update magic_links set used_at = ?
             where id = ? and used_at is null",
            params![now, ml.id],
        )
        .map_err(|e| ServerError::DbError(format!("update magic link used_at failed: {e}")))?;

    if updated != 1 {
        tx.rollback().ok();
        return Ok(None);
    }

    tx.commit()
        .map_err(|e| ServerError::DbError(format!("commit tx failed: {e}")))?;

    Ok(Some(ml.user_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::open_in_memory;

    #[test]
    fn get_or_create_user_is_idempotent() {
        let conn = open_in_memory();

        let now = 1000;
        let id1 = get_or_create_user(&conn, "test@example.com", now).unwrap();
        let id2 = get_or_create_user(&conn, "test@example.com", now + 1).unwrap();
        assert_eq!(id1, id2);
        assert_eq!(find_user_email(&conn, id1).unwrap(), "test@example.com");
    }

    #[test]
    fn magic_link_insert_and_consume_once() {
        let mut conn = open_in_memory();

        let now = 1000;
        let user_id = get_or_create_user(&conn, "c@d.com", now).unwrap();

        let token_hash = b"fake_hash_32_bytes_len__________";
        insert_magic_link(&conn, user_id, token_hash, now, now + 900).unwrap();

        let ok = consume_magic_link(&mut conn, token_hash, now + 1).unwrap();
        assert_eq!(ok, Some(user_id));

        // second consume should fail (used)
        let second = consume_magic_link(&mut conn, token_hash, now + 2).unwrap();
        assert_eq!(second, None);
    }

    #[test]
    fn magic_link_expired_cannot_be_consumed() {
        let mut conn = open_in_memory();

        let now = 1000;
        let user_id = get_or_create_user(&conn, "e@f.com", now).unwrap();

        let token_hash = b"another_fake_hash______________";
        insert_magic_link(&conn, user_id, token_hash, now, now + 10).unwrap();

        let res = consume_magic_link(&mut conn, token_hash, now + 11).unwrap();
        assert_eq!(res, None);
    }

    #[test]
    fn last_login_is_recorded() {
        let conn = open_in_memory();
        let user_id = get_or_create_user(&conn, "g@h.com", 10).unwrap();
        touch_last_login(&conn, user_id, 99).unwrap();

        let last: Option<i64> = conn
            .query_row(
                "select last_login_at from users where id = ?",
                params![user_id],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(last, Some(99));
    }
}
