use crate::errors::SahayakResult;
use crate::models::{OfflineQueueEntry, RequestCacheEntry};

/// Key/value storage for cached server collections and the offline queue.
pub trait IRequestStore: Send + Sync {
    // --- Collection cache ---
    fn get_entry(&self, key: &str) -> SahayakResult<Option<RequestCacheEntry>>;
    /// Overwrites any entry with the same key.
    fn put_entry(&self, entry: &RequestCacheEntry) -> SahayakResult<()>;
    fn remove_entry(&self, key: &str) -> SahayakResult<()>;

    // --- Offline queue (append-only until removed) ---
    fn enqueue(&self, entry: &OfflineQueueEntry) -> SahayakResult<()>;
    /// Queued entries, oldest first.
    fn queued(&self) -> SahayakResult<Vec<OfflineQueueEntry>>;
    fn remove_queued(&self, id: &str) -> SahayakResult<bool>;
    /// Returns the number of entries removed.
    fn clear_queue(&self) -> SahayakResult<usize>;
    fn queue_len(&self) -> SahayakResult<usize>;
}

impl<T: IRequestStore + ?Sized> IRequestStore for std::sync::Arc<T> {
    fn get_entry(&self, key: &str) -> SahayakResult<Option<RequestCacheEntry>> {
        (**self).get_entry(key)
    }
    fn put_entry(&self, entry: &RequestCacheEntry) -> SahayakResult<()> {
        (**self).put_entry(entry)
    }
    fn remove_entry(&self, key: &str) -> SahayakResult<()> {
        (**self).remove_entry(key)
    }
    fn enqueue(&self, entry: &OfflineQueueEntry) -> SahayakResult<()> {
        (**self).enqueue(entry)
    }
    fn queued(&self) -> SahayakResult<Vec<OfflineQueueEntry>> {
        (**self).queued()
    }
    fn remove_queued(&self, id: &str) -> SahayakResult<bool> {
        (**self).remove_queued(id)
    }
    fn clear_queue(&self) -> SahayakResult<usize> {
        (**self).clear_queue()
    }
    fn queue_len(&self) -> SahayakResult<usize> {
        (**self).queue_len()
    }
}
