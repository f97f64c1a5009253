use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::seed::default_schema_version;
use super::Language;

/// Bookkeeping for one logical sync stream. Overwritten on every run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncMeta {
    pub key: String,
    pub timestamp: DateTime<Utc>,
    /// Artifacts actually written by the run.
    pub topics_count: usize,
    pub grade: u8,
    pub language: Language,
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
}
