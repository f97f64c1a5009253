//! v001: artifacts, seeds, schedule, sync_meta.

use rusqlite::Connection;

use sahayak_core::errors::SahayakResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> SahayakResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS artifacts (
            seq             INTEGER PRIMARY KEY AUTOINCREMENT,
            id              TEXT NOT NULL UNIQUE,
            topic           TEXT NOT NULL,
            language        TEXT NOT NULL,
            fetched_at      TEXT NOT NULL,
            data            TEXT NOT NULL,
            schema_version  INTEGER NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_artifacts_topic ON artifacts(topic);
        CREATE INDEX IF NOT EXISTS idx_artifacts_fetched_at ON artifacts(fetched_at);

        CREATE TABLE IF NOT EXISTS seeds (
            topic_key       TEXT PRIMARY KEY,
            topic           TEXT NOT NULL,
            fetched_at      TEXT NOT NULL,
            data            TEXT NOT NULL,
            schema_version  INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS schedule (
            id              TEXT PRIMARY KEY,
            captured_at     TEXT NOT NULL,
            data            TEXT NOT NULL,
            schema_version  INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS sync_meta (
            key             TEXT PRIMARY KEY,
            timestamp       TEXT NOT NULL,
            data            TEXT NOT NULL,
            schema_version  INTEGER NOT NULL
        );
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
