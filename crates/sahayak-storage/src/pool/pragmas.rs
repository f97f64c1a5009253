//! PRAGMA configuration applied to every SQLite connection.

use rusqlite::Connection;

use sahayak_core::errors::SahayakResult;

use crate::to_storage_err;

/// Apply write-side pragmas: WAL, NORMAL sync, busy timeout, incremental vacuum.
pub fn apply_pragmas(conn: &Connection, busy_timeout_ms: u32) -> SahayakResult<()> {
    conn.execute_batch(&format!(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA cache_size = -16000;
        PRAGMA busy_timeout = {busy_timeout_ms};
        PRAGMA foreign_keys = ON;
        PRAGMA auto_vacuum = INCREMENTAL;
        "
    ))
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Apply read-side pragmas.
pub fn apply_read_pragmas(conn: &Connection, busy_timeout_ms: u32) -> SahayakResult<()> {
    conn.execute_batch(&format!(
        "
        PRAGMA busy_timeout = {busy_timeout_ms};
        PRAGMA cache_size = -16000;
        "
    ))
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Verify that WAL mode is active on a connection.
pub fn verify_wal_mode(conn: &Connection) -> SahayakResult<bool> {
    let mode: String = conn
        .pragma_query_value(None, "journal_mode", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(mode.eq_ignore_ascii_case("wal"))
}
