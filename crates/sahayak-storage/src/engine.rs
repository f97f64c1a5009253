//! StorageEngine — owns the ConnectionPool, implements ICacheStore + IRequestStore,
//! runs migrations at startup.

use std::path::Path;

use rusqlite::Connection;

use sahayak_core::config::StorageConfig;
use sahayak_core::errors::SahayakResult;
use sahayak_core::models::{
    CachedArtifact, OfflineQueueEntry, RequestCacheEntry, ScheduleSnapshot, SeedRecord, SyncMeta,
};
use sahayak_core::traits::{ICacheStore, IRequestStore};

use crate::migrations;
use crate::pool::ConnectionPool;
use crate::queries::{
    artifact_ops, maintenance, offline_queue_ops, request_cache_ops, schedule_ops, seed_ops,
    sync_meta_ops,
};

/// The local store. Owns the connection pool and provides every collection.
pub struct StorageEngine {
    pool: ConnectionPool,
}

impl StorageEngine {
    /// Open a storage engine backed by a file on disk, with default pool settings.
    pub fn open(path: &Path) -> SahayakResult<Self> {
        Self::open_with_config(path, &StorageConfig::default())
    }

    /// Open a file-backed engine using the pool settings from `config`.
    pub fn open_with_config(path: &Path, config: &StorageConfig) -> SahayakResult<Self> {
        let pool = ConnectionPool::open(path, config.read_pool_size, config.busy_timeout_ms)?;
        let engine = Self { pool };
        engine.initialize()?;
        tracing::info!(path = %path.display(), "local store opened");
        Ok(engine)
    }

    /// Open an in-memory storage engine (for testing and ephemeral sessions).
    pub fn open_in_memory() -> SahayakResult<Self> {
        let pool = ConnectionPool::open_in_memory()?;
        let engine = Self { pool };
        engine.initialize()?;
        Ok(engine)
    }

    fn initialize(&self) -> SahayakResult<()> {
        self.pool.writer.with_conn_sync(|conn| {
            migrations::run_migrations(conn)?;
            Ok(())
        })
    }

    /// Get a reference to the connection pool (for advanced operations).
    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    /// Current schema version.
    pub fn schema_version(&self) -> SahayakResult<u32> {
        self.pool.writer.with_conn_sync(migrations::current_version)
    }

    /// Number of stored artifacts, without decoding them.
    pub fn artifact_count(&self) -> SahayakResult<usize> {
        self.with_reader(artifact_ops::count_artifacts)
    }

    /// Returns true when SQLite reports no corruption.
    pub fn integrity_check(&self) -> SahayakResult<bool> {
        self.pool.writer.with_conn_sync(maintenance::integrity_check)
    }

    /// Reclaim free pages and truncate the WAL. Intended after a retention sweep.
    pub fn compact(&self) -> SahayakResult<()> {
        self.pool.writer.with_conn_sync(|conn| {
            maintenance::incremental_vacuum(conn, 0)?;
            if !self.pool.is_in_memory() {
                maintenance::wal_checkpoint(conn)?;
            }
            Ok(())
        })
    }

    /// Execute a read-only query on the best available connection.
    fn with_reader<F, T>(&self, f: F) -> SahayakResult<T>
    where
        F: FnOnce(&Connection) -> SahayakResult<T>,
    {
        if self.pool.is_in_memory() {
            self.pool.writer.with_conn_sync(f)
        } else {
            self.pool.readers.with_conn(f)
        }
    }
}

impl ICacheStore for StorageEngine {
    fn put_artifact(&self, artifact: &CachedArtifact) -> SahayakResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| artifact_ops::put_artifact(conn, artifact))
    }

    fn get_artifact(&self, id: &str) -> SahayakResult<Option<CachedArtifact>> {
        self.with_reader(|conn| artifact_ops::get_artifact(conn, id))
    }

    fn all_artifacts(&self) -> SahayakResult<Vec<CachedArtifact>> {
        self.with_reader(artifact_ops::all_artifacts)
    }

    fn delete_artifact(&self, id: &str) -> SahayakResult<bool> {
        self.pool
            .writer
            .with_conn_sync(|conn| artifact_ops::delete_artifact(conn, id))
    }

    fn put_seed(&self, seed: &SeedRecord) -> SahayakResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| seed_ops::put_seed(conn, seed))
    }

    fn get_seed(&self, topic: &str) -> SahayakResult<Option<SeedRecord>> {
        self.with_reader(|conn| seed_ops::get_seed(conn, topic))
    }

    fn all_seeds(&self) -> SahayakResult<Vec<SeedRecord>> {
        self.with_reader(seed_ops::all_seeds)
    }

    fn put_schedule(&self, snapshot: &ScheduleSnapshot) -> SahayakResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| schedule_ops::put_schedule(conn, snapshot))
    }

    fn get_schedule(&self) -> SahayakResult<Option<ScheduleSnapshot>> {
        self.with_reader(schedule_ops::get_schedule)
    }

    fn put_sync_meta(&self, meta: &SyncMeta) -> SahayakResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| sync_meta_ops::put_sync_meta(conn, meta))
    }

    fn get_sync_meta(&self, key: &str) -> SahayakResult<Option<SyncMeta>> {
        self.with_reader(|conn| sync_meta_ops::get_sync_meta(conn, key))
    }
}

impl IRequestStore for StorageEngine {
    fn get_entry(&self, key: &str) -> SahayakResult<Option<RequestCacheEntry>> {
        self.with_reader(|conn| request_cache_ops::get_entry(conn, key))
    }

    fn put_entry(&self, entry: &RequestCacheEntry) -> SahayakResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| request_cache_ops::put_entry(conn, entry))
    }

    fn remove_entry(&self, key: &str) -> SahayakResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| request_cache_ops::remove_entry(conn, key))
    }

    fn enqueue(&self, entry: &OfflineQueueEntry) -> SahayakResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| offline_queue_ops::enqueue(conn, entry))
    }

    fn queued(&self) -> SahayakResult<Vec<OfflineQueueEntry>> {
        self.with_reader(offline_queue_ops::queued)
    }

    fn remove_queued(&self, id: &str) -> SahayakResult<bool> {
        self.pool
            .writer
            .with_conn_sync(|conn| offline_queue_ops::remove(conn, id))
    }

    fn clear_queue(&self) -> SahayakResult<usize> {
        self.pool.writer.with_conn_sync(offline_queue_ops::clear)
    }

    fn queue_len(&self) -> SahayakResult<usize> {
        self.with_reader(offline_queue_ops::count)
    }
}
