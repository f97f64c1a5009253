//! Cached server collections: one row per key, overwritten on refresh.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use sahayak_core::errors::SahayakResult;
use sahayak_core::models::RequestCacheEntry;

use super::{decode, encode};
use crate::{corrupt, to_storage_err};

const COLLECTION: &str = "request_cache";

pub fn put_entry(conn: &Connection, entry: &RequestCacheEntry) -> SahayakResult<()> {
    let payload = encode(&entry.payload)?;
    conn.execute(
        "INSERT OR REPLACE INTO request_cache (key, payload, cached_at) VALUES (?1, ?2, ?3)",
        params![entry.key, payload, entry.cached_at.to_rfc3339()],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

pub fn get_entry(conn: &Connection, key: &str) -> SahayakResult<Option<RequestCacheEntry>> {
    let row: Option<(String, String)> = conn
        .query_row(
            "SELECT payload, cached_at FROM request_cache WHERE key = ?1",
            params![key],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    let Some((payload, cached_at)) = row else {
        return Ok(None);
    };
    let cached_at = DateTime::parse_from_rfc3339(&cached_at)
        .map_err(|e| corrupt(COLLECTION, key, e))?
        .with_timezone(&Utc);
    Ok(Some(RequestCacheEntry {
        key: key.to_string(),
        payload: decode(COLLECTION, key, &payload)?,
        cached_at,
    }))
}

pub fn remove_entry(conn: &Connection, key: &str) -> SahayakResult<()> {
    conn.execute("DELETE FROM request_cache WHERE key = ?1", params![key])
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
