use crate::errors::SahayakResult;
use crate::models::{CachedArtifact, ScheduleSnapshot, SeedRecord, SyncMeta};

/// The durable local store behind the speculative cache.
///
/// Four independent collections: artifacts keyed by id, seeds keyed by
/// lowercase topic, one schedule snapshot, and sync metadata keyed by stream.
/// Implementations serialize per-key operations; no cross-call locking is
/// expected of callers.
pub trait ICacheStore: Send + Sync {
    // --- Artifacts ---
    fn put_artifact(&self, artifact: &CachedArtifact) -> SahayakResult<()>;
    fn get_artifact(&self, id: &str) -> SahayakResult<Option<CachedArtifact>>;
    /// All artifacts in store iteration (insertion) order.
    fn all_artifacts(&self) -> SahayakResult<Vec<CachedArtifact>>;
    /// Returns whether a row was removed.
    fn delete_artifact(&self, id: &str) -> SahayakResult<bool>;

    // --- Seeds ---
    /// Upsert by lowercase topic.
    fn put_seed(&self, seed: &SeedRecord) -> SahayakResult<()>;
    fn get_seed(&self, topic: &str) -> SahayakResult<Option<SeedRecord>>;
    fn all_seeds(&self) -> SahayakResult<Vec<SeedRecord>>;

    // --- Schedule ---
    fn put_schedule(&self, snapshot: &ScheduleSnapshot) -> SahayakResult<()>;
    fn get_schedule(&self) -> SahayakResult<Option<ScheduleSnapshot>>;

    // --- Sync metadata ---
    /// Overwrites any record with the same key.
    fn put_sync_meta(&self, meta: &SyncMeta) -> SahayakResult<()>;
    fn get_sync_meta(&self, key: &str) -> SahayakResult<Option<SyncMeta>>;
}

/// Shared handles delegate to the underlying store, so one engine can back
/// the prefetch scheduler and the lookup API at once.
impl<T: ICacheStore + ?Sized> ICacheStore for std::sync::Arc<T> {
    fn put_artifact(&self, artifact: &CachedArtifact) -> SahayakResult<()> {
        (**self).put_artifact(artifact)
    }
    fn get_artifact(&self, id: &str) -> SahayakResult<Option<CachedArtifact>> {
        (**self).get_artifact(id)
    }
    fn all_artifacts(&self) -> SahayakResult<Vec<CachedArtifact>> {
        (**self).all_artifacts()
    }
    fn delete_artifact(&self, id: &str) -> SahayakResult<bool> {
        (**self).delete_artifact(id)
    }
    fn put_seed(&self, seed: &SeedRecord) -> SahayakResult<()> {
        (**self).put_seed(seed)
    }
    fn get_seed(&self, topic: &str) -> SahayakResult<Option<SeedRecord>> {
        (**self).get_seed(topic)
    }
    fn all_seeds(&self) -> SahayakResult<Vec<SeedRecord>> {
        (**self).all_seeds()
    }
    fn put_schedule(&self, snapshot: &ScheduleSnapshot) -> SahayakResult<()> {
        (**self).put_schedule(snapshot)
    }
    fn get_schedule(&self) -> SahayakResult<Option<ScheduleSnapshot>> {
        (**self).get_schedule()
    }
    fn put_sync_meta(&self, meta: &SyncMeta) -> SahayakResult<()> {
        (**self).put_sync_meta(meta)
    }
    fn get_sync_meta(&self, key: &str) -> SahayakResult<Option<SyncMeta>> {
        (**self).get_sync_meta(key)
    }
}
