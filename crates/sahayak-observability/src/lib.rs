//! # sahayak-observability
//!
//! Subscriber setup, span macros, structured events, and a tracker for
//! degraded (stale-cache) fetches.

pub mod degradation;
pub mod tracing_setup;

pub use degradation::{DegradationEvent, DegradationTracker, RecoveryStatus};
pub use tracing_setup::{init_tracing, init_tracing_with_filter, ENV_LOG_FILTER};
