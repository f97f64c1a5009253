//! Append-only queue of actions captured while offline.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use sahayak_core::errors::SahayakResult;
use sahayak_core::models::OfflineQueueEntry;

use super::{decode, encode};
use crate::{corrupt, to_storage_err};

const COLLECTION: &str = "offline_queue";

pub fn enqueue(conn: &Connection, entry: &OfflineQueueEntry) -> SahayakResult<()> {
    let request = encode(&entry.request)?;
    conn.execute(
        "INSERT INTO offline_queue (id, request, queued_at) VALUES (?1, ?2, ?3)",
        params![entry.id, request, entry.queued_at.to_rfc3339()],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Queued entries, oldest first.
pub fn queued(conn: &Connection) -> SahayakResult<Vec<OfflineQueueEntry>> {
    let mut stmt = conn
        .prepare("SELECT id, request, queued_at FROM offline_queue ORDER BY seq ASC")
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
            ))
        })
        .map_err(|e| to_storage_err(e.to_string()))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))?;

    rows.into_iter()
        .map(|(id, request, queued_at)| {
            let queued_at = DateTime::parse_from_rfc3339(&queued_at)
                .map_err(|e| corrupt(COLLECTION, &id, e))?
                .with_timezone(&Utc);
            Ok(OfflineQueueEntry {
                request: decode(COLLECTION, &id, &request)?,
                id,
                queued_at,
            })
        })
        .collect()
}

pub fn remove(conn: &Connection, id: &str) -> SahayakResult<bool> {
    let deleted = conn
        .execute("DELETE FROM offline_queue WHERE id = ?1", params![id])
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(deleted > 0)
}

pub fn clear(conn: &Connection) -> SahayakResult<usize> {
    conn.execute("DELETE FROM offline_queue", [])
        .map_err(|e| to_storage_err(e.to_string()))
}

pub fn count(conn: &Connection) -> SahayakResult<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM offline_queue", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as usize)
}
