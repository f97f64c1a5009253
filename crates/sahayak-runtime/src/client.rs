//! CacheClient: owns config, store, and every engine built on the store.

use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use sahayak_cache::{CachedFetch, Connectivity, HttpRemoteSource, OfflineQueue, RequestCache};
use sahayak_core::config::SahayakConfig;
use sahayak_core::constants::QUICK_FIXES_KEY;
use sahayak_core::errors::SahayakResult;
use sahayak_core::models::{
    ArtifactHit, CacheStats, Language, LessonPlan, PrefetchOutcome, PrefetchedTopics,
    ScheduleSnapshot, SeedLookup,
};
use sahayak_core::traits::{ICacheStore, RemoteSource};
use sahayak_prediction::{upcoming_lessons, CacheLookup, CancelToken, PrefetchEngine};
use sahayak_storage::StorageEngine;

type SharedStore = Arc<StorageEngine>;

/// The cache layer's single entry point.
pub struct CacheClient {
    config: SahayakConfig,
    store: SharedStore,
    prefetch: PrefetchEngine<SharedStore>,
    lookup: CacheLookup<SharedStore>,
    request_cache: RequestCache<SharedStore>,
    offline_queue: OfflineQueue<SharedStore>,
}

impl CacheClient {
    /// Open a file-backed client at `config.storage.db_path`.
    pub fn open(config: SahayakConfig) -> SahayakResult<Self> {
        config.validate()?;
        sahayak_observability::init_tracing(&config.observability);
        let store = StorageEngine::open_with_config(Path::new(&config.storage.db_path), &config.storage)?;
        Ok(Self::with_store(config, store))
    }

    /// Load `path` (with environment overrides) and open a file-backed client.
    pub fn from_config_file(path: &Path) -> SahayakResult<Self> {
        Self::open(SahayakConfig::from_file(path)?)
    }

    /// Open a client over an in-memory store. Nothing survives the process.
    pub fn open_in_memory(config: SahayakConfig) -> SahayakResult<Self> {
        config.validate()?;
        Ok(Self::with_store(config, StorageEngine::open_in_memory()?))
    }

    fn with_store(config: SahayakConfig, store: StorageEngine) -> Self {
        let store = Arc::new(store);
        Self {
            prefetch: PrefetchEngine::new(
                store.clone(),
                config.prefetch.clone(),
                config.retention.clone(),
            ),
            lookup: CacheLookup::new(store.clone()),
            request_cache: RequestCache::new(store.clone(), Connectivity::default()),
            offline_queue: OfflineQueue::new(store.clone()),
            store,
            config,
        }
    }

    pub fn config(&self) -> &SahayakConfig {
        &self.config
    }

    pub fn store(&self) -> &StorageEngine {
        &self.store
    }

    pub fn prefetch_engine(&self) -> &PrefetchEngine<SharedStore> {
        &self.prefetch
    }

    // --- Speculative prefetch ---

    pub fn run_prefetch(&self, grade: u8, language: Language) -> SahayakResult<PrefetchOutcome> {
        self.prefetch.run_prefetch(grade, language)
    }

    /// Prefetch for the configured default grade and language.
    pub fn run_default_prefetch(&self) -> SahayakResult<PrefetchOutcome> {
        self.prefetch
            .run_prefetch(self.config.prefetch.grade, self.config.prefetch.language)
    }

    pub fn run_prefetch_at(
        &self,
        grade: u8,
        language: Language,
        now: DateTime<Utc>,
        cancel: Option<&CancelToken>,
    ) -> SahayakResult<PrefetchOutcome> {
        self.prefetch.run_prefetch_at(grade, language, now, cancel)
    }

    /// Retention sweep with the configured window.
    pub fn cleanup(&self) -> SahayakResult<usize> {
        self.prefetch.cleanup()
    }

    pub fn cleanup_at(&self, now: DateTime<Utc>) -> SahayakResult<usize> {
        self.prefetch.cleanup_at(now)
    }

    // --- Lookup ---

    pub fn lookup(&self, query: &str) -> SahayakResult<Option<ArtifactHit>> {
        self.lookup.lookup(query)
    }

    pub fn get_seed(&self, topic: &str, language: Language) -> SahayakResult<Option<SeedLookup>> {
        self.lookup.get_seed(topic, language)
    }

    pub fn prefetched_topics(&self) -> SahayakResult<PrefetchedTopics> {
        self.lookup.prefetched_topics()
    }

    pub fn cache_stats(&self) -> SahayakResult<CacheStats> {
        self.lookup.cache_stats()
    }

    // --- Lessons ---

    pub fn upcoming_lessons(&self, grade: u8) -> Vec<LessonPlan> {
        upcoming_lessons(grade, Utc::now())
    }

    pub fn upcoming_lessons_at(&self, grade: u8, now: DateTime<Utc>) -> Vec<LessonPlan> {
        upcoming_lessons(grade, now)
    }

    /// Lessons listing captured by the last prefetch run.
    pub fn schedule(&self) -> SahayakResult<Option<ScheduleSnapshot>> {
        self.store.get_schedule()
    }

    // --- Request cache + offline queue ---

    pub fn request_cache(&self) -> &RequestCache<SharedStore> {
        &self.request_cache
    }

    pub fn offline_queue(&self) -> &OfflineQueue<SharedStore> {
        &self.offline_queue
    }

    pub fn connectivity(&self) -> &Connectivity {
        self.request_cache.connectivity()
    }

    pub fn set_online(&self, online: bool) {
        self.request_cache.connectivity().set_online(online);
    }

    /// HTTP source for the quick-fix collection, per the remote config.
    pub fn quick_fix_source(&self) -> HttpRemoteSource {
        HttpRemoteSource::quick_fixes(&self.config.remote, self.config.request_cache.quick_fix_limit)
    }

    /// Quick fixes, cache-first with stale fallback.
    pub fn quick_fixes(&self, source: &dyn RemoteSource) -> SahayakResult<CachedFetch> {
        self.quick_fixes_at(source, Utc::now())
    }

    pub fn quick_fixes_at(&self, source: &dyn RemoteSource, now: DateTime<Utc>) -> SahayakResult<CachedFetch> {
        self.request_cache.fetch_or_cached_at(
            QUICK_FIXES_KEY,
            self.config.request_cache.max_age_minutes,
            source,
            now,
        )
    }
}
