//! Artifacts fetched more than `max_age` ago → delete.
//!
//! The sweep lists artifacts once and deletes from that snapshot, so every
//! stored artifact is visited exactly once. Artifacts written by a prefetch
//! running concurrently are not in the snapshot; an artifact the snapshot
//! holds may already have been counted in that run's sync metadata. Both are
//! accepted staleness for a best-effort cache.

use chrono::{DateTime, Duration, Utc};

use sahayak_core::config::defaults::DEFAULT_RETENTION_DAYS;
use sahayak_core::errors::SahayakResult;
use sahayak_core::traits::ICacheStore;

/// Run the sweep with the default threshold.
pub fn sweep(store: &dyn ICacheStore, now: DateTime<Utc>) -> SahayakResult<usize> {
    sweep_older_than(store, now, Duration::days(DEFAULT_RETENTION_DAYS))
}

/// Remove every artifact whose `fetched_at` is strictly before `now - max_age`.
/// Returns the number removed. A failed delete is logged and skipped.
/// A window reaching past the earliest representable instant removes nothing.
pub fn sweep_older_than(
    store: &dyn ICacheStore,
    now: DateTime<Utc>,
    max_age: Duration,
) -> SahayakResult<usize> {
    let Some(cutoff) = now.checked_sub_signed(max_age) else {
        tracing::info!(max_age_days = max_age.num_days(), "retention window predates every artifact");
        return Ok(0);
    };
    let artifacts = store.all_artifacts()?;

    let mut removed = 0;
    for artifact in artifacts.iter().filter(|a| a.fetched_at < cutoff) {
        match store.delete_artifact(&artifact.id) {
            Ok(true) => removed += 1,
            Ok(false) => {}
            Err(e) => {
                tracing::warn!(artifact_id = %artifact.id, error = %e, "retention: delete failed");
            }
        }
    }

    tracing::info!(removed, scanned = artifacts.len(), %cutoff, "retention sweep complete");
    Ok(removed)
}
