//! Versioned schema migrations, recorded in `schema_version`.
//!
//! Each migration runs inside its own transaction; the version row is written
//! in the same transaction so a failed step leaves the previous version intact.

pub mod v001_speculative_tables;
pub mod v002_request_cache_tables;

use rusqlite::{params, Connection};

use sahayak_core::errors::{SahayakError, SahayakResult, StorageError};

use crate::to_storage_err;

type MigrationFn = fn(&Connection) -> SahayakResult<()>;

/// All migrations in application order.
const MIGRATIONS: &[(u32, &str, MigrationFn)] = &[
    (1, "speculative_tables", v001_speculative_tables::migrate),
    (2, "request_cache_tables", v002_request_cache_tables::migrate),
];

/// Highest schema version known to this build.
pub const LATEST_VERSION: u32 = 2;

/// Apply every pending migration. Returns the resulting schema version.
pub fn run_migrations(conn: &Connection) -> SahayakResult<u32> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS schema_version (
            version     INTEGER PRIMARY KEY,
            name        TEXT NOT NULL,
            applied_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    let mut version = current_version(conn)?;
    for &(target, name, migrate) in MIGRATIONS {
        if target <= version {
            continue;
        }
        apply_one(conn, target, name, migrate).map_err(|e| {
            SahayakError::StorageError(StorageError::MigrationFailed {
                version: target,
                reason: e.to_string(),
            })
        })?;
        tracing::debug!(version = target, name, "applied migration");
        version = target;
    }
    Ok(version)
}

/// Current schema version (0 for a fresh database).
pub fn current_version(conn: &Connection) -> SahayakResult<u32> {
    conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

fn apply_one(conn: &Connection, version: u32, name: &str, migrate: MigrationFn) -> SahayakResult<()> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("migration begin: {e}")))?;
    migrate(&tx)?;
    tx.execute(
        "INSERT INTO schema_version (version, name) VALUES (?1, ?2)",
        params![version, name],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    tx.commit()
        .map_err(|e| to_storage_err(format!("migration commit: {e}")))
}
