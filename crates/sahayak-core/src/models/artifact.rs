use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::seed::default_schema_version;
use super::{Language, TopicPrediction};
use crate::constants::CACHE_TYPE_SPECULATIVE;

/// A generic classroom strategy attached to every mini-playbook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeachingStrategy {
    pub title: String,
    pub description: String,
}

/// A prefetched mini-playbook for one predicted topic.
///
/// Written once by the prefetch scheduler, read-only afterwards, removed by
/// the retention sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedArtifact {
    /// Unique per topic, language, and fetch instant.
    pub id: String,
    pub topic: String,
    pub language: Language,
    pub seed: String,
    pub strategies: Vec<TeachingStrategy>,
    pub ncert_ref: String,
    pub prefetched: bool,
    pub fetched_at: DateTime<Utc>,
    /// The prediction that caused this artifact to be prefetched.
    pub prediction: TopicPrediction,
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
}

/// A speculative cache hit returned by topic lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactHit {
    #[serde(flatten)]
    pub artifact: CachedArtifact,
    pub cache_hit: bool,
    pub cache_type: String,
}

impl ArtifactHit {
    pub fn speculative(artifact: CachedArtifact) -> Self {
        Self {
            artifact,
            cache_hit: true,
            cache_type: CACHE_TYPE_SPECULATIVE.to_string(),
        }
    }
}
