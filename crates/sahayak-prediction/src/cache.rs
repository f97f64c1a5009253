//! Prediction memo.
//!
//! Predictions depend only on grade, subject list, and curriculum week, so a
//! computed ranking is reused until the week rolls over. Uses
//! `moka::sync::Cache`; tracks hits and misses.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use moka::sync::Cache;

use sahayak_core::config::defaults::DEFAULT_PREDICTION_CACHE_CAPACITY;
use sahayak_core::models::TopicPrediction;

/// Entries outlive at most one curriculum week.
const TIME_TO_LIVE: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Memo key: one ranking per grade, subject list, and week.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PredictionKey {
    pub grade: u8,
    pub subjects: Vec<String>,
    pub week: i64,
}

/// Memoized predictions with hit/miss tracking.
pub struct PredictionCache {
    cache: Cache<PredictionKey, Vec<TopicPrediction>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl PredictionCache {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_PREDICTION_CACHE_CAPACITY)
    }

    pub fn with_capacity(capacity: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(capacity)
            .time_to_live(TIME_TO_LIVE)
            .build();
        Self {
            cache,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Cached ranking for `key`, or compute and store it.
    pub fn get_or_compute<F>(&self, key: PredictionKey, compute: F) -> Vec<TopicPrediction>
    where
        F: FnOnce() -> Vec<TopicPrediction>,
    {
        if let Some(hit) = self.cache.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return hit;
        }
        self.misses.fetch_add(1, Ordering::Relaxed);
        let predictions = compute();
        self.cache.insert(key, predictions.clone());
        predictions
    }

    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Hit rate (0.0–1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = (self.hits() + self.misses()) as f64;
        if total == 0.0 {
            0.0
        } else {
            self.hits() as f64 / total
        }
    }
}

impl Default for PredictionCache {
    fn default() -> Self {
        Self::new()
    }
}
