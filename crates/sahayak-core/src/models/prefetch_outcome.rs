use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A topic written by a prefetch run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrefetchedTopic {
    pub topic: String,
    pub chapter: String,
    pub confidence: f64,
}

/// Result of a prefetch run. Partial success is still success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrefetchOutcome {
    pub success: bool,
    pub prefetched_count: usize,
    pub topics: Vec<PrefetchedTopic>,
    pub timestamp: DateTime<Utc>,
    /// Set when the run stopped early on a cancellation request.
    #[serde(default)]
    pub cancelled: bool,
}

/// One stored artifact, summarized for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrefetchedTopicInfo {
    pub topic: String,
    pub chapter: String,
    pub confidence: f64,
    pub fetched_at: DateTime<Utc>,
}

/// Everything currently prefetched, plus the last sync time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrefetchedTopics {
    pub topics: Vec<PrefetchedTopicInfo>,
    pub last_sync: Option<DateTime<Utc>>,
    pub total_cached: usize,
}

/// Read-only introspection of the speculative store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheStats {
    pub total_playbooks: usize,
    pub total_seeds: usize,
    pub last_sync: Option<DateTime<Utc>>,
    /// Serialized size of all artifacts and seeds.
    pub cache_size_bytes: usize,
    pub cache_size_kb: f64,
}
