//! PrefetchEngine: turn predictions into stored artifacts while online.
//!
//! One run takes the top-ranked predictions, synthesizes a playbook for each,
//! writes it, refreshes the bundled seed, captures the lessons listing, and
//! overwrites the sync metadata. Individual failures are logged and skipped;
//! a run only errors when another run is already in flight.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};

use sahayak_core::config::{PrefetchConfig, RetentionConfig};
use sahayak_core::constants::{SCHEDULE_SNAPSHOT_ID, SCHEMA_VERSION, SYNC_META_KEY};
use sahayak_core::errors::{SahayakError, SahayakResult};
use sahayak_core::models::{
    Language, PrefetchOutcome, PrefetchedTopic, ScheduleSnapshot, SyncMeta, TopicPrediction,
};
use sahayak_core::traits::ICacheStore;
use sahayak_observability::tracing_setup::events;
use sahayak_storage::compaction::retention;

use crate::cache::{PredictionCache, PredictionKey};
use crate::predictor::{predict_topics, upcoming_lessons};
use crate::schedule::curriculum_week;
use crate::{playbook, seeds};

/// Cooperative cancellation for a prefetch run. Checked between items only,
/// so an artifact is never half-written.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Run state. At most one run is `Running` per engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefetchState {
    Idle,
    Running { started_at: DateTime<Utc> },
}

/// Returns the engine to `Idle` on every exit path.
struct RunGuard<'a> {
    state: &'a Mutex<PrefetchState>,
}

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        *lock_state(self.state) = PrefetchState::Idle;
    }
}

fn lock_state(state: &Mutex<PrefetchState>) -> MutexGuard<'_, PrefetchState> {
    // The state is a plain enum; a panic elsewhere cannot leave it torn.
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Speculative prefetch scheduler over a cache store.
pub struct PrefetchEngine<S: ICacheStore> {
    store: S,
    config: PrefetchConfig,
    retention: RetentionConfig,
    cache: PredictionCache,
    state: Mutex<PrefetchState>,
}

impl<S: ICacheStore> PrefetchEngine<S> {
    pub fn new(store: S, config: PrefetchConfig, retention: RetentionConfig) -> Self {
        let cache = PredictionCache::with_capacity(config.prediction_cache_capacity);
        Self {
            store,
            config,
            retention,
            cache,
            state: Mutex::new(PrefetchState::Idle),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &PrefetchConfig {
        &self.config
    }

    pub fn prediction_cache(&self) -> &PredictionCache {
        &self.cache
    }

    pub fn state(&self) -> PrefetchState {
        *lock_state(&self.state)
    }

    /// Ranked predictions for the configured subjects, memoized per week.
    pub fn predict(&self, grade: u8, now: DateTime<Utc>) -> Vec<TopicPrediction> {
        let key = PredictionKey {
            grade,
            subjects: self.config.subjects.clone(),
            week: curriculum_week(now),
        };
        self.cache
            .get_or_compute(key, || predict_topics(grade, &self.config.subjects, now, &self.config))
    }

    /// Run a prefetch now, without cancellation.
    pub fn run_prefetch(&self, grade: u8, language: Language) -> SahayakResult<PrefetchOutcome> {
        self.run_prefetch_at(grade, language, Utc::now(), None)
    }

    /// Run a prefetch as of `now`.
    ///
    /// Returns `PrefetchInProgress` if a run is already active. Otherwise
    /// always succeeds; `prefetched_count` is the number of artifacts written.
    pub fn run_prefetch_at(
        &self,
        grade: u8,
        language: Language,
        now: DateTime<Utc>,
        cancel: Option<&CancelToken>,
    ) -> SahayakResult<PrefetchOutcome> {
        let _guard = self.begin(now)?;
        let _span = sahayak_observability::prefetch_span!(grade, language).entered();

        let predictions = self.predict(grade, now);
        events::prefetch_started(grade, language.code(), predictions.len());

        let mut topics = Vec::new();
        let mut cancelled = false;
        for prediction in predictions.iter().take(self.config.batch_size) {
            if cancel.is_some_and(CancelToken::is_cancelled) {
                cancelled = true;
                break;
            }
            if self.prefetch_one(prediction, language, now) {
                topics.push(PrefetchedTopic {
                    topic: prediction.topic.clone(),
                    chapter: prediction.chapter.clone(),
                    confidence: prediction.confidence,
                });
            }
        }

        self.capture_schedule(grade, now);

        let meta = SyncMeta {
            key: SYNC_META_KEY.to_string(),
            timestamp: now,
            topics_count: topics.len(),
            grade,
            language,
            schema_version: SCHEMA_VERSION,
        };
        if let Err(e) = self.store.put_sync_meta(&meta) {
            tracing::warn!(error = %e, "failed to record sync metadata");
        }

        events::prefetch_completed(topics.len(), cancelled);
        Ok(PrefetchOutcome {
            success: true,
            prefetched_count: topics.len(),
            topics,
            timestamp: now,
            cancelled,
        })
    }

    /// Remove artifacts older than the retention window. Caller-invoked only.
    pub fn cleanup(&self) -> SahayakResult<usize> {
        self.cleanup_at(Utc::now())
    }

    pub fn cleanup_at(&self, now: DateTime<Utc>) -> SahayakResult<usize> {
        let _span = sahayak_observability::sweep_span!(self.retention.max_age_days).entered();
        retention::sweep_older_than(&self.store, now, self.retention.max_age())
    }

    fn begin(&self, now: DateTime<Utc>) -> SahayakResult<RunGuard<'_>> {
        let mut state = lock_state(&self.state);
        if let PrefetchState::Running { started_at } = *state {
            return Err(SahayakError::PrefetchInProgress {
                started_at: started_at.to_rfc3339(),
            });
        }
        *state = PrefetchState::Running { started_at: now };
        Ok(RunGuard { state: &self.state })
    }

    /// Write one artifact and refresh its seed. Returns whether the artifact
    /// was stored.
    fn prefetch_one(&self, prediction: &TopicPrediction, language: Language, now: DateTime<Utc>) -> bool {
        let artifact = playbook::synthesize(prediction, language, now);
        if let Err(e) = self.store.put_artifact(&artifact) {
            events::artifact_write_failed(&prediction.topic, &e.to_string());
            return false;
        }

        if let Some(seed) = seeds::lookup(&prediction.topic) {
            if let Err(e) = self.store.put_seed(&seed.to_record(&prediction.topic, now)) {
                tracing::warn!(topic = %prediction.topic, error = %e, "failed to refresh seed");
            }
        }

        events::artifact_prefetched(&prediction.topic, prediction.confidence);
        true
    }

    fn capture_schedule(&self, grade: u8, now: DateTime<Utc>) {
        let snapshot = ScheduleSnapshot {
            id: SCHEDULE_SNAPSHOT_ID.to_string(),
            grade,
            curriculum_week: curriculum_week(now),
            lessons: upcoming_lessons(grade, now),
            captured_at: now,
            schema_version: SCHEMA_VERSION,
        };
        if let Err(e) = self.store.put_schedule(&snapshot) {
            tracing::warn!(error = %e, "failed to capture schedule snapshot");
        }
    }
}
