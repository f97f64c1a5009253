use rusqlite::{params, Connection, OptionalExtension};

use sahayak_core::errors::SahayakResult;
use sahayak_core::models::SyncMeta;

use super::{decode, encode};
use crate::to_storage_err;

/// Overwrite the record for `meta.key`.
pub fn put_sync_meta(conn: &Connection, meta: &SyncMeta) -> SahayakResult<()> {
    let data = encode(meta)?;
    conn.execute(
        "INSERT OR REPLACE INTO sync_meta (key, timestamp, data, schema_version)
         VALUES (?1, ?2, ?3, ?4)",
        params![meta.key, meta.timestamp.to_rfc3339(), data, meta.schema_version],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

pub fn get_sync_meta(conn: &Connection, key: &str) -> SahayakResult<Option<SyncMeta>> {
    let data: Option<String> = conn
        .query_row(
            "SELECT data FROM sync_meta WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    data.map(|d| decode("sync_meta", key, &d)).transpose()
}
