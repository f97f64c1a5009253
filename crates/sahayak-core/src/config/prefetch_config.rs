use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::DEFAULT_PREFETCH_SUBJECTS;
use crate::models::Language;

/// Speculative prefetch configuration.
///
/// The confidence values and batch size are knobs rather than literals so a
/// deployment can tune them; the defaults reproduce the field behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PrefetchConfig {
    /// Grade used when the caller does not pass one.
    pub grade: u8,
    /// Language used when the caller does not pass one.
    pub language: Language,
    /// Subjects fed to the predictor, in priority order.
    pub subjects: Vec<String>,
    /// Number of top-ranked predictions materialized per run.
    pub batch_size: usize,
    /// Confidence assigned to current-chapter topics.
    pub current_chapter_confidence: f64,
    /// Confidence assigned to next-chapter topics.
    pub next_chapter_confidence: f64,
    /// Maximum next-chapter topics predicted per subject.
    pub next_chapter_topic_limit: usize,
    /// Capacity of the in-memory prediction memo.
    pub prediction_cache_capacity: u64,
}

impl Default for PrefetchConfig {
    fn default() -> Self {
        Self {
            grade: defaults::DEFAULT_GRADE,
            language: Language::Hi,
            subjects: DEFAULT_PREFETCH_SUBJECTS.iter().map(|s| s.to_string()).collect(),
            batch_size: defaults::DEFAULT_BATCH_SIZE,
            current_chapter_confidence: defaults::DEFAULT_CURRENT_CHAPTER_CONFIDENCE,
            next_chapter_confidence: defaults::DEFAULT_NEXT_CHAPTER_CONFIDENCE,
            next_chapter_topic_limit: defaults::DEFAULT_NEXT_CHAPTER_TOPIC_LIMIT,
            prediction_cache_capacity: defaults::DEFAULT_PREDICTION_CACHE_CAPACITY,
        }
    }
}
