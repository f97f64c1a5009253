//! Offline read path: fuzzy topic lookup, seed fallback, introspection.
//!
//! Misses are `Ok(None)`. Store read failures propagate.

use sahayak_core::constants::SYNC_META_KEY;
use sahayak_core::errors::SahayakResult;
use sahayak_core::models::{
    ArtifactHit, CacheStats, Language, PrefetchedTopicInfo, PrefetchedTopics, SeedLookup,
};
use sahayak_core::traits::ICacheStore;
use sahayak_observability::tracing_setup::events;

use crate::seeds;

/// Read-only view over a cache store.
pub struct CacheLookup<S: ICacheStore> {
    store: S,
}

impl<S: ICacheStore> CacheLookup<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// First artifact (store order) whose topic contains the query or is
    /// contained in it, case-insensitively. The query is not trimmed, so an
    /// empty query matches the first stored artifact.
    pub fn lookup(&self, query: &str) -> SahayakResult<Option<ArtifactHit>> {
        let _span = sahayak_observability::lookup_span!(query).entered();
        let needle = query.to_lowercase();
        let hit = self.store.all_artifacts()?.into_iter().find(|artifact| {
            let topic = artifact.topic.to_lowercase();
            topic.contains(&needle) || needle.contains(&topic)
        });

        Ok(hit.map(|artifact| {
            events::cache_hit(query, &artifact.topic);
            ArtifactHit::speculative(artifact)
        }))
    }

    /// Persisted seed text if the requested language is populated; otherwise
    /// the bundled table (requested language, then English).
    pub fn get_seed(&self, topic: &str, language: Language) -> SahayakResult<Option<SeedLookup>> {
        if let Some(record) = self.store.get_seed(topic)? {
            if let Some(text) = record.text(language) {
                return Ok(Some(SeedLookup {
                    topic: topic.to_string(),
                    seed: text.to_string(),
                    cached: true,
                }));
            }
        }

        Ok(seeds::lookup(topic).map(|seed| SeedLookup {
            topic: topic.to_string(),
            seed: seed.text(language).to_string(),
            cached: false,
        }))
    }

    /// Everything currently stored, summarized.
    pub fn prefetched_topics(&self) -> SahayakResult<PrefetchedTopics> {
        let artifacts = self.store.all_artifacts()?;
        let last_sync = self.store.get_sync_meta(SYNC_META_KEY)?.map(|m| m.timestamp);
        let topics: Vec<PrefetchedTopicInfo> = artifacts
            .into_iter()
            .map(|a| PrefetchedTopicInfo {
                topic: a.topic,
                chapter: a.prediction.chapter,
                confidence: a.prediction.confidence,
                fetched_at: a.fetched_at,
            })
            .collect();
        Ok(PrefetchedTopics {
            total_cached: topics.len(),
            topics,
            last_sync,
        })
    }

    /// Counts and serialized size of the speculative store.
    pub fn cache_stats(&self) -> SahayakResult<CacheStats> {
        let artifacts = self.store.all_artifacts()?;
        let seeds = self.store.all_seeds()?;
        let last_sync = self.store.get_sync_meta(SYNC_META_KEY)?.map(|m| m.timestamp);

        let cache_size_bytes = serde_json::to_string(&artifacts)?.len() + serde_json::to_string(&seeds)?.len();
        Ok(CacheStats {
            total_playbooks: artifacts.len(),
            total_seeds: seeds.len(),
            last_sync,
            cache_size_bytes,
            cache_size_kb: (cache_size_bytes as f64 / 1024.0 * 100.0).round() / 100.0,
        })
    }
}
