//! Cache-first fetch for server collections.
//!
//! A fresh entry is served without touching the network. A stale or missing
//! entry triggers a fetch; on success the entry is overwritten, on failure
//! the stale entry is served and flagged as degraded. Only a failure with
//! nothing cached is an error.

use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use sahayak_core::errors::{FetchError, SahayakResult};
use sahayak_core::models::RequestCacheEntry;
use sahayak_core::traits::{IRequestStore, RemoteSource};
use sahayak_observability::{DegradationEvent, DegradationTracker};

use crate::connectivity::Connectivity;

/// Result of a cache-first fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedFetch {
    pub payload: serde_json::Value,
    /// Served from the local entry rather than the network.
    pub from_cache: bool,
    /// The network was needed but unavailable; `payload` may be outdated.
    pub degraded: bool,
}

/// Key/value cache of server collections with a freshness window.
pub struct RequestCache<S: IRequestStore> {
    store: S,
    connectivity: Connectivity,
    degradations: Mutex<DegradationTracker>,
}

impl<S: IRequestStore> RequestCache<S> {
    pub fn new(store: S, connectivity: Connectivity) -> Self {
        Self {
            store,
            connectivity,
            degradations: Mutex::new(DegradationTracker::new()),
        }
    }

    pub fn connectivity(&self) -> &Connectivity {
        &self.connectivity
    }

    /// Snapshot of recorded degradations.
    pub fn degradations(&self) -> DegradationTracker {
        self.tracker().clone()
    }

    pub fn get(&self, key: &str) -> SahayakResult<Option<RequestCacheEntry>> {
        self.store.get_entry(key)
    }

    /// Overwrite the entry for `key`, stamped now.
    pub fn set(&self, key: &str, payload: serde_json::Value) -> SahayakResult<()> {
        self.set_at(key, payload, Utc::now())
    }

    pub fn set_at(&self, key: &str, payload: serde_json::Value, now: DateTime<Utc>) -> SahayakResult<()> {
        self.store.put_entry(&RequestCacheEntry {
            key: key.to_string(),
            payload,
            cached_at: now,
        })
    }

    pub fn remove(&self, key: &str) -> SahayakResult<()> {
        self.store.remove_entry(key)
    }

    /// Missing entries are stale; otherwise stale iff older than `max_age_minutes`.
    pub fn is_stale(&self, key: &str, max_age_minutes: i64) -> SahayakResult<bool> {
        self.is_stale_at(key, max_age_minutes, Utc::now())
    }

    pub fn is_stale_at(&self, key: &str, max_age_minutes: i64, now: DateTime<Utc>) -> SahayakResult<bool> {
        Ok(self
            .store
            .get_entry(key)?
            .map_or(true, |entry| entry_is_stale(&entry, max_age_minutes, now)))
    }

    pub fn fetch_or_cached(
        &self,
        key: &str,
        max_age_minutes: i64,
        source: &dyn RemoteSource,
    ) -> SahayakResult<CachedFetch> {
        self.fetch_or_cached_at(key, max_age_minutes, source, Utc::now())
    }

    /// Serve `key` cache-first as of `now`, revalidating through `source`.
    pub fn fetch_or_cached_at(
        &self,
        key: &str,
        max_age_minutes: i64,
        source: &dyn RemoteSource,
        now: DateTime<Utc>,
    ) -> SahayakResult<CachedFetch> {
        let _span = sahayak_observability::fetch_span!(key).entered();
        let cached = self.store.get_entry(key)?;

        if let Some(entry) = &cached {
            if !entry_is_stale(entry, max_age_minutes, now) {
                return Ok(CachedFetch {
                    payload: entry.payload.clone(),
                    from_cache: true,
                    degraded: false,
                });
            }
        }

        let fetched = if self.connectivity.is_online() {
            source.fetch()
        } else {
            Err(FetchError::Offline)
        };

        match fetched {
            Ok(payload) => {
                if let Err(e) = self.set_at(key, payload.clone(), now) {
                    tracing::warn!(key, error = %e, "fetched collection could not be cached");
                }
                self.tracker().mark_recovered(key, now);
                Ok(CachedFetch {
                    payload,
                    from_cache: false,
                    degraded: false,
                })
            }
            Err(err) => match cached {
                Some(entry) => {
                    self.tracker().record(DegradationEvent {
                        component: key.to_string(),
                        failure: err.to_string(),
                        fallback_used: "stale cache entry".to_string(),
                        timestamp: now,
                    });
                    Ok(CachedFetch {
                        payload: entry.payload,
                        from_cache: true,
                        degraded: true,
                    })
                }
                None => Err(err.into()),
            },
        }
    }

    fn tracker(&self) -> MutexGuard<'_, DegradationTracker> {
        self.degradations
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn entry_is_stale(entry: &RequestCacheEntry, max_age_minutes: i64, now: DateTime<Utc>) -> bool {
    entry.age_minutes(now) > max_age_minutes as f64
}
