//! Record every degradation: component, failure, fallback used, timestamp,
//! recovery status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::tracing_setup::events;

/// One degraded operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegradationEvent {
    /// Collection key or subsystem name.
    pub component: String,
    pub failure: String,
    pub fallback_used: String,
    pub timestamp: DateTime<Utc>,
}

/// Recovery status of a degradation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryStatus {
    /// Still serving fallback data.
    Active,
    /// A later fetch succeeded.
    Recovered,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackedDegradation {
    pub event: DegradationEvent,
    pub recovery_status: RecoveryStatus,
    pub recovered_at: Option<DateTime<Utc>>,
}

/// Default number of events kept before the oldest are dropped.
pub const DEFAULT_EVENT_LIMIT: usize = 256;

/// Bounded in-memory log of degradations for status reporting.
#[derive(Debug, Clone)]
pub struct DegradationTracker {
    events: Vec<TrackedDegradation>,
    limit: usize,
}

impl Default for DegradationTracker {
    fn default() -> Self {
        Self::with_limit(DEFAULT_EVENT_LIMIT)
    }
}

impl DegradationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            events: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Record a new degradation event. Past the limit, recovered events go
    /// first, then the oldest active ones.
    pub fn record(&mut self, event: DegradationEvent) {
        events::fetch_degraded(&event.component, &event.failure);
        self.events.push(TrackedDegradation {
            event,
            recovery_status: RecoveryStatus::Active,
            recovered_at: None,
        });
        if self.events.len() > self.limit {
            self.events.retain(|t| t.recovery_status == RecoveryStatus::Active);
        }
        if let Some(excess) = self.events.len().checked_sub(self.limit) {
            self.events.drain(..excess);
        }
    }

    /// Mark every active degradation of `component` as recovered at `now`.
    pub fn mark_recovered(&mut self, component: &str, now: DateTime<Utc>) {
        for tracked in self.events.iter_mut().filter(|t| {
            t.event.component == component && t.recovery_status == RecoveryStatus::Active
        }) {
            tracked.recovery_status = RecoveryStatus::Recovered;
            tracked.recovered_at = Some(now);
        }
    }

    pub fn events(&self) -> &[TrackedDegradation] {
        &self.events
    }

    pub fn active_degradations(&self) -> Vec<&TrackedDegradation> {
        self.events
            .iter()
            .filter(|t| t.recovery_status == RecoveryStatus::Active)
            .collect()
    }

    pub fn is_degraded(&self, component: &str) -> bool {
        self.events
            .iter()
            .any(|t| t.event.component == component && t.recovery_status == RecoveryStatus::Active)
    }

    /// How long `component` has been continuously degraded as of `now`.
    pub fn degraded_duration(&self, component: &str, now: DateTime<Utc>) -> Option<chrono::Duration> {
        let earliest = self
            .events
            .iter()
            .filter(|t| {
                t.event.component == component && t.recovery_status == RecoveryStatus::Active
            })
            .map(|t| t.event.timestamp)
            .min()?;
        Some(now - earliest)
    }
}
