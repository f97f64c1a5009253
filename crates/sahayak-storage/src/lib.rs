//! # sahayak-storage
//!
//! Durable local store for the speculative cache. SQLite with WAL, a single
//! write connection, a round-robin read pool, and versioned migrations.
//!
//! ## Collections
//!
//! | Table | Key | Contents |
//! |-------|-----|----------|
//! | `artifacts` | artifact id | prefetched mini-playbooks |
//! | `seeds` | lowercase topic | knowledge seeds with fetch time |
//! | `schedule` | fixed id | last captured lessons listing |
//! | `sync_meta` | stream key | last prefetch bookkeeping |
//! | `request_cache` | collection key | server collections with `cached_at` |
//! | `offline_queue` | queue id | actions captured while offline |

pub mod compaction;
pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StorageEngine;

use sahayak_core::errors::{SahayakError, StorageError};

/// Convert a driver-level message into the workspace error type.
pub(crate) fn to_storage_err(message: impl Into<String>) -> SahayakError {
    SahayakError::StorageError(StorageError::SqliteError {
        message: message.into(),
    })
}

/// Build a decode error for a record that no longer deserializes.
pub(crate) fn corrupt(collection: &str, key: &str, err: impl std::fmt::Display) -> SahayakError {
    SahayakError::StorageError(StorageError::CorruptRecord {
        collection: collection.to_string(),
        key: key.to_string(),
        reason: err.to_string(),
    })
}
