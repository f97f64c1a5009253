//! Put, get, list, delete for prefetched artifacts.

use rusqlite::{params, Connection, OptionalExtension};

use sahayak_core::errors::SahayakResult;
use sahayak_core::models::CachedArtifact;

use super::{decode, decode_all, encode};
use crate::to_storage_err;

const COLLECTION: &str = "artifacts";

/// Insert or replace an artifact by id. A replaced id keeps its original
/// position in iteration order.
pub fn put_artifact(conn: &Connection, artifact: &CachedArtifact) -> SahayakResult<()> {
    let data = encode(artifact)?;
    conn.execute(
        "INSERT INTO artifacts (id, topic, language, fetched_at, data, schema_version)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)
         ON CONFLICT(id) DO UPDATE SET
            topic = excluded.topic,
            language = excluded.language,
            fetched_at = excluded.fetched_at,
            data = excluded.data,
            schema_version = excluded.schema_version",
        params![
            artifact.id,
            artifact.topic,
            artifact.language.code(),
            artifact.fetched_at.to_rfc3339(),
            data,
            artifact.schema_version,
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

pub fn get_artifact(conn: &Connection, id: &str) -> SahayakResult<Option<CachedArtifact>> {
    let data: Option<String> = conn
        .query_row("SELECT data FROM artifacts WHERE id = ?1", params![id], |row| {
            row.get(0)
        })
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    data.map(|d| decode(COLLECTION, id, &d)).transpose()
}

/// All artifacts in insertion order.
pub fn all_artifacts(conn: &Connection) -> SahayakResult<Vec<CachedArtifact>> {
    let mut stmt = conn
        .prepare("SELECT id, data FROM artifacts ORDER BY seq ASC")
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)))
        .map_err(|e| to_storage_err(e.to_string()))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(decode_all(COLLECTION, rows))
}

pub fn delete_artifact(conn: &Connection, id: &str) -> SahayakResult<bool> {
    let deleted = conn
        .execute("DELETE FROM artifacts WHERE id = ?1", params![id])
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(deleted > 0)
}

pub fn count_artifacts(conn: &Connection) -> SahayakResult<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM artifacts", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as usize)
}
