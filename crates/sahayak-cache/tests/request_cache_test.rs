//! Request cache freshness, stale fallback, and connectivity handling.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use sahayak_cache::{Connectivity, RequestCache};
use sahayak_core::errors::{FetchError, SahayakError};
use sahayak_core::traits::RemoteSource;
use sahayak_observability::degradation::tracker::DEFAULT_EVENT_LIMIT;
use sahayak_storage::StorageEngine;
use serde_json::{json, Value};

const KEY: &str = "quick_fixes";

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 8, 5, 9, 0, 0).unwrap()
}

/// Scripted remote: returns the queued responses in order, counting calls.
struct ScriptedSource {
    responses: Mutex<Vec<Result<Value, FetchError>>>,
    calls: AtomicUsize,
}

impl ScriptedSource {
    fn new(responses: Vec<Result<Value, FetchError>>) -> Self {
        Self {
            responses: Mutex::new(responses),
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl RemoteSource for ScriptedSource {
    fn fetch(&self) -> Result<Value, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Err(FetchError::Network {
                reason: "no scripted response".into(),
            })
        } else {
            responses.remove(0)
        }
    }
}

fn cache() -> RequestCache<StorageEngine> {
    RequestCache::new(StorageEngine::open_in_memory().unwrap(), Connectivity::default())
}

fn network_down() -> FetchError {
    FetchError::Network {
        reason: "connection refused".into(),
    }
}

// ── Staleness ─────────────────────────────────────────────────────────────

#[test]
fn missing_entry_is_stale() {
    assert!(cache().is_stale_at(KEY, 60, t0()).unwrap());
}

#[test]
fn sixty_one_minutes_is_stale_fifty_nine_is_fresh() {
    let cache = cache();
    cache.set_at(KEY, json!([1]), t0()).unwrap();
    assert!(!cache.is_stale_at(KEY, 60, t0() + Duration::minutes(59)).unwrap());
    assert!(!cache.is_stale_at(KEY, 60, t0() + Duration::minutes(60)).unwrap());
    assert!(cache.is_stale_at(KEY, 60, t0() + Duration::minutes(61)).unwrap());
}

proptest! {
    #[test]
    fn stale_iff_older_than_max_age(age_secs in 0i64..20_000, max_age in 0i64..300) {
        let cache = cache();
        cache.set_at(KEY, json!([]), t0()).unwrap();
        let stale = cache.is_stale_at(KEY, max_age, t0() + Duration::seconds(age_secs)).unwrap();
        prop_assert_eq!(stale, age_secs > max_age * 60);
    }
}

// ── Cache-first fetch ─────────────────────────────────────────────────────

#[test]
fn fresh_entry_skips_network() {
    let cache = cache();
    cache.set_at(KEY, json!(["cached"]), t0()).unwrap();
    let source = ScriptedSource::new(vec![Ok(json!(["remote"]))]);

    let result = cache
        .fetch_or_cached_at(KEY, 60, &source, t0() + Duration::minutes(10))
        .unwrap();
    assert_eq!(result.payload, json!(["cached"]));
    assert!(result.from_cache);
    assert!(!result.degraded);
    assert_eq!(source.calls(), 0);
}

#[test]
fn stale_entry_is_refreshed_from_network() {
    let cache = cache();
    cache.set_at(KEY, json!(["old"]), t0()).unwrap();
    let source = ScriptedSource::new(vec![Ok(json!(["new"]))]);
    let later = t0() + Duration::minutes(61);

    let result = cache.fetch_or_cached_at(KEY, 60, &source, later).unwrap();
    assert_eq!(result.payload, json!(["new"]));
    assert!(!result.from_cache);
    assert_eq!(source.calls(), 1);

    let entry = cache.get(KEY).unwrap().unwrap();
    assert_eq!(entry.payload, json!(["new"]));
    assert_eq!(entry.cached_at, later);
}

#[test]
fn fetch_failure_serves_stale_entry_as_degraded() {
    let cache = cache();
    cache.set_at(KEY, json!(["old"]), t0()).unwrap();
    let source = ScriptedSource::new(vec![Err(network_down())]);
    let later = t0() + Duration::hours(3);

    let result = cache.fetch_or_cached_at(KEY, 60, &source, later).unwrap();
    assert_eq!(result.payload, json!(["old"]));
    assert!(result.from_cache);
    assert!(result.degraded);

    // The stale entry is not re-stamped.
    assert_eq!(cache.get(KEY).unwrap().unwrap().cached_at, t0());
    assert!(cache.degradations().is_degraded(KEY));
}

#[test]
fn recovery_clears_degradation() {
    let cache = cache();
    cache.set_at(KEY, json!(["old"]), t0()).unwrap();
    let source = ScriptedSource::new(vec![Err(network_down()), Ok(json!(["new"]))]);

    cache
        .fetch_or_cached_at(KEY, 60, &source, t0() + Duration::hours(2))
        .unwrap();
    cache
        .fetch_or_cached_at(KEY, 60, &source, t0() + Duration::hours(3))
        .unwrap();
    assert!(!cache.degradations().is_degraded(KEY));
}

#[test]
fn fetch_failure_with_nothing_cached_is_an_error() {
    let cache = cache();
    let source = ScriptedSource::new(vec![Err(FetchError::Status { status: 503 })]);
    let err = cache.fetch_or_cached_at(KEY, 60, &source, t0()).unwrap_err();
    assert!(matches!(
        err,
        SahayakError::FetchError(FetchError::Status { status: 503 })
    ));
}

// ── Connectivity ──────────────────────────────────────────────────────────

#[test]
fn offline_serves_stale_without_calling_network() {
    let connectivity = Connectivity::new(false);
    let cache = RequestCache::new(StorageEngine::open_in_memory().unwrap(), connectivity.clone());
    cache.set_at(KEY, json!(["old"]), t0()).unwrap();
    let source = ScriptedSource::new(vec![Ok(json!(["new"]))]);

    let result = cache
        .fetch_or_cached_at(KEY, 60, &source, t0() + Duration::days(1))
        .unwrap();
    assert!(result.degraded);
    assert_eq!(source.calls(), 0);

    connectivity.go_online();
    let result = cache
        .fetch_or_cached_at(KEY, 60, &source, t0() + Duration::days(1))
        .unwrap();
    assert!(!result.degraded);
    assert_eq!(result.payload, json!(["new"]));
}

#[test]
fn offline_with_empty_cache_reports_offline() {
    let cache = RequestCache::new(StorageEngine::open_in_memory().unwrap(), Connectivity::new(false));
    let source = ScriptedSource::new(vec![]);
    let err = cache.fetch_or_cached_at(KEY, 60, &source, t0()).unwrap_err();
    assert!(matches!(err, SahayakError::FetchError(FetchError::Offline)));
    assert!(!cache.connectivity().is_online());
}

#[test]
fn sustained_offline_polling_keeps_degradation_log_bounded() {
    let cache = RequestCache::new(StorageEngine::open_in_memory().unwrap(), Connectivity::new(false));
    cache.set_at(KEY, json!(["old"]), t0()).unwrap();
    let source = ScriptedSource::new(vec![]);

    for minute in 0..(DEFAULT_EVENT_LIMIT as i64 + 50) {
        let at = t0() + Duration::hours(2) + Duration::minutes(minute);
        assert!(cache.fetch_or_cached_at(KEY, 60, &source, at).unwrap().degraded);
    }
    let tracker = cache.degradations();
    assert_eq!(tracker.events().len(), DEFAULT_EVENT_LIMIT);
    assert!(tracker.is_degraded(KEY));
}
