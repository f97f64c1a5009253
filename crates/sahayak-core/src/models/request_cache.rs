use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One cached server collection. Exactly one entry per key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestCacheEntry {
    pub key: String,
    pub payload: serde_json::Value,
    pub cached_at: DateTime<Utc>,
}

impl RequestCacheEntry {
    /// Age of the entry in (fractional) minutes relative to `now`.
    pub fn age_minutes(&self, now: DateTime<Utc>) -> f64 {
        (now - self.cached_at).num_milliseconds() as f64 / 60_000.0
    }
}

/// A user action captured while disconnected, awaiting delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfflineQueueEntry {
    pub id: String,
    /// The original request fields.
    pub request: serde_json::Value,
    pub queued_at: DateTime<Utc>,
}
