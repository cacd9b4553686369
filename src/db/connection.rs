use rusqlite::Connection;
use std::cell::RefCell;
use tracing::{debug, info};

use crate::errors::ServerError;

const SCHEMA_SQL: &str = include_str!("../../sql/schema.sql");

// Thread-local connection slot, remembering which file it was opened on.
thread_local! {
    static DB_CONN: RefCell<Option<(String, Connection)>> = const { RefCell::new(None) };
}

#[derive(Clone, Debug)]
pub struct Database {
    path: String,
}

impl Database {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Provides a mutable connection to the closure.
    /// Each worker thread opens its own connection on first use.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&mut Connection) -> Result<T, ServerError>,
    {
        DB_CONN
            .try_with(|cell| {
                let mut slot = cell.borrow_mut();

                let stale = !matches!(slot.as_ref(), Some((path, _)) if *path == self.path);
                if stale {
                    debug!(path = %self.path, "opening sqlite connection");
                    let conn = Connection::open(&self.path)
                        .map_err(|e| ServerError::DbError(format!("Open DB failed: {e}")))?;
                    conn.execute_batch("PRAGMA foreign_keys = ON; PRAGMA busy_timeout = 5000;")
                        .map_err(|e| ServerError::DbError(format!("Set pragmas failed: {e}")))?;
                    *slot = Some((self.path.clone(), conn));
                }

                match slot.as_mut() {
                    Some((_, conn)) => f(conn),
                    None => Err(ServerError::InternalError),
                }
            })
            .map_err(|_| ServerError::InternalError)?
    }
}

/// Apply the embedded schema. Safe to run on every start.
pub fn init_db(db: &Database) -> Result<(), ServerError> {
    db.with_conn(|conn| {
        conn.execute_batch(SCHEMA_SQL)
            .map_err(|e| ServerError::DbError(format!("Failed to apply schema: {e}")))?;
        Ok(())
    })?;

    info!(path = %db.path(), "database initialized");
    Ok(())
}

#[cfg(test)]
pub(crate) fn open_in_memory() -> Connection {
    let conn = Connection::open_in_memory().expect("open in-memory db");
    conn.execute_batch(SCHEMA_SQL).expect("apply schema");
    conn
}
