//! The single serialized write connection.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use sahayak_core::config::defaults::DEFAULT_BUSY_TIMEOUT_MS;
use sahayak_core::errors::SahayakResult;

use super::pragmas::apply_pragmas;
use crate::to_storage_err;

/// Owns the only connection allowed to write. All writes serialize here.
pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    pub fn open(path: &Path, busy_timeout_ms: u32) -> SahayakResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, busy_timeout_ms)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn open_in_memory() -> SahayakResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, DEFAULT_BUSY_TIMEOUT_MS)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Execute a closure with exclusive access to the write connection.
    pub fn with_conn_sync<F, T>(&self, f: F) -> SahayakResult<T>
    where
        F: FnOnce(&Connection) -> SahayakResult<T>,
    {
        let guard = self
            .conn
            .lock()
            .map_err(|e| to_storage_err(format!("write connection lock poisoned: {e}")))?;
        f(&guard)
    }
}
