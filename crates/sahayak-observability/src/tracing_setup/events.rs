//! Structured log events for key cache operations.
//!
//! Each function emits a `tracing` event with an `event` field naming it.

/// Log the start of a prefetch run.
pub fn prefetch_started(grade: u8, language: &str, predicted: usize) {
    tracing::info!(
        event = "prefetch_started",
        grade,
        language = %language,
        predicted,
        "speculative prefetch started"
    );
}

/// Log one materialized artifact.
pub fn artifact_prefetched(topic: &str, confidence: f64) {
    tracing::debug!(
        event = "artifact_prefetched",
        topic = %topic,
        confidence_pct = (confidence * 100.0).round() as u32,
        "pre-fetched topic"
    );
}

/// Log a per-topic write failure. The run continues.
pub fn artifact_write_failed(topic: &str, error: &str) {
    tracing::warn!(
        event = "artifact_write_failed",
        topic = %topic,
        error = %error,
        "failed to pre-fetch topic"
    );
}

/// Log the end of a prefetch run.
pub fn prefetch_completed(written: usize, cancelled: bool) {
    tracing::info!(
        event = "prefetch_completed",
        written,
        cancelled,
        "speculative prefetch complete"
    );
}

/// Log a speculative cache hit.
pub fn cache_hit(query: &str, topic: &str) {
    tracing::info!(
        event = "cache_hit",
        query = %query,
        topic = %topic,
        "speculative cache hit"
    );
}

/// Log a remote fetch that fell back to a stale entry.
pub fn fetch_degraded(key: &str, failure: &str) {
    tracing::warn!(
        event = "fetch_degraded",
        key = %key,
        failure = %failure,
        "remote fetch failed, serving cached data"
    );
}
