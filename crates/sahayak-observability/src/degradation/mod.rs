//! Degradation tracking: remember when a collection was served stale.

pub mod tracker;

pub use tracker::{DegradationEvent, DegradationTracker, RecoveryStatus, TrackedDegradation};
