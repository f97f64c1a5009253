//! Upsert and read knowledge seeds, keyed by lowercase topic.

use rusqlite::{params, Connection, OptionalExtension};

use sahayak_core::errors::SahayakResult;
use sahayak_core::models::SeedRecord;

use super::{decode, decode_all, encode};
use crate::to_storage_err;

const COLLECTION: &str = "seeds";

pub fn put_seed(conn: &Connection, seed: &SeedRecord) -> SahayakResult<()> {
    let data = encode(seed)?;
    conn.execute(
        "INSERT INTO seeds (topic_key, topic, fetched_at, data, schema_version)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(topic_key) DO UPDATE SET
            topic = excluded.topic,
            fetched_at = excluded.fetched_at,
            data = excluded.data,
            schema_version = excluded.schema_version",
        params![
            seed.key(),
            seed.topic,
            seed.fetched_at.to_rfc3339(),
            data,
            seed.schema_version,
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

pub fn get_seed(conn: &Connection, topic: &str) -> SahayakResult<Option<SeedRecord>> {
    let key = topic.to_lowercase();
    let data: Option<String> = conn
        .query_row(
            "SELECT data FROM seeds WHERE topic_key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    data.map(|d| decode(COLLECTION, &key, &d)).transpose()
}

pub fn all_seeds(conn: &Connection) -> SahayakResult<Vec<SeedRecord>> {
    let mut stmt = conn
        .prepare("SELECT topic_key, data FROM seeds ORDER BY topic_key ASC")
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)))
        .map_err(|e| to_storage_err(e.to_string()))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(decode_all(COLLECTION, rows))
}
