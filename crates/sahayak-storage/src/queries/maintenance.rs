//! Checkpoint, vacuum, integrity check.

use rusqlite::Connection;

use sahayak_core::errors::SahayakResult;

use crate::to_storage_err;

/// Run incremental vacuum to return freed pages after a sweep.
pub fn incremental_vacuum(conn: &Connection, pages: u32) -> SahayakResult<()> {
    conn.execute_batch(&format!("PRAGMA incremental_vacuum({pages})"))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// WAL checkpoint.
pub fn wal_checkpoint(conn: &Connection) -> SahayakResult<()> {
    conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE)")
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Run integrity check. Returns true if the database is OK.
pub fn integrity_check(conn: &Connection) -> SahayakResult<bool> {
    let result: String = conn
        .query_row("PRAGMA integrity_check", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(result == "ok")
}
