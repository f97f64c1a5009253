//! # sahayak-core
//!
//! Foundation crate for the Sahayak speculative cache.
//! Defines the persisted record types, store traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::SahayakConfig;
pub use errors::{SahayakError, SahayakResult};
pub use models::{CachedArtifact, Language, SeedRecord, SyncMeta, TopicPrediction};
