//! v002: request_cache, offline_queue.

use rusqlite::Connection;

use sahayak_core::errors::SahayakResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> SahayakResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS request_cache (
            key         TEXT PRIMARY KEY,
            payload     TEXT NOT NULL,
            cached_at   TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS offline_queue (
            seq         INTEGER PRIMARY KEY AUTOINCREMENT,
            id          TEXT NOT NULL UNIQUE,
            request     TEXT NOT NULL,
            queued_at   TEXT NOT NULL
        );
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
