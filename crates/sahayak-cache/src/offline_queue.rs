//! Durable queue of user actions captured while disconnected.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use sahayak_core::errors::SahayakResult;
use sahayak_core::models::OfflineQueueEntry;
use sahayak_core::traits::IRequestStore;

/// FIFO queue over the request store. Entries stay until removed.
pub struct OfflineQueue<S: IRequestStore> {
    store: S,
}

impl<S: IRequestStore> OfflineQueue<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Queue `request` now. Returns the stored entry.
    pub fn add(&self, request: serde_json::Value) -> SahayakResult<OfflineQueueEntry> {
        self.add_at(request, Utc::now())
    }

    pub fn add_at(&self, request: serde_json::Value, now: DateTime<Utc>) -> SahayakResult<OfflineQueueEntry> {
        let entry = OfflineQueueEntry {
            id: format!("offline_{}", Uuid::new_v4()),
            request,
            queued_at: now,
        };
        self.store.enqueue(&entry)?;
        tracing::info!(id = %entry.id, "queued request for delivery when online");
        Ok(entry)
    }

    /// Queued entries, oldest first.
    pub fn all(&self) -> SahayakResult<Vec<OfflineQueueEntry>> {
        self.store.queued()
    }

    /// Remove a delivered entry. Unknown ids are a no-op.
    pub fn remove(&self, id: &str) -> SahayakResult<bool> {
        self.store.remove_queued(id)
    }

    pub fn clear(&self) -> SahayakResult<usize> {
        self.store.clear_queue()
    }

    pub fn count(&self) -> SahayakResult<usize> {
        self.store.queue_len()
    }
}
