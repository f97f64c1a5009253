//! Per-collection SQL. Records are stored as JSON next to indexed key columns.

pub mod artifact_ops;
pub mod maintenance;
pub mod offline_queue_ops;
pub mod request_cache_ops;
pub mod schedule_ops;
pub mod seed_ops;
pub mod sync_meta_ops;

use serde::de::DeserializeOwned;
use serde::Serialize;

use sahayak_core::errors::SahayakResult;

use crate::corrupt;

pub(crate) fn encode<T: Serialize>(value: &T) -> SahayakResult<String> {
    Ok(serde_json::to_string(value)?)
}

pub(crate) fn decode<T: DeserializeOwned>(collection: &str, key: &str, data: &str) -> SahayakResult<T> {
    serde_json::from_str(data).map_err(|e| corrupt(collection, key, e))
}

/// Decode a listing, skipping rows that no longer deserialize.
pub(crate) fn decode_all<T: DeserializeOwned>(collection: &str, rows: Vec<(String, String)>) -> Vec<T> {
    rows.into_iter()
        .filter_map(|(key, data)| match decode(collection, &key, &data) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(collection, key = %key, error = %e, "skipping unreadable record");
                None
            }
        })
        .collect()
}
