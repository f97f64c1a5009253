//! Round-robin read connections. Under WAL these never wait on the writer.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use rusqlite::{Connection, OpenFlags};

use sahayak_core::config::defaults::DEFAULT_BUSY_TIMEOUT_MS;
use sahayak_core::errors::SahayakResult;

use super::pragmas::apply_read_pragmas;
use crate::to_storage_err;

/// Upper bound on reader connections regardless of configuration.
const MAX_READERS: usize = 8;

pub struct ReadPool {
    readers: Vec<Mutex<Connection>>,
    cursor: AtomicUsize,
}

impl ReadPool {
    /// Attach `size` read-only connections to an existing database file.
    pub fn open(path: &Path, size: usize, busy_timeout_ms: u32) -> SahayakResult<Self> {
        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        Self::build(size, busy_timeout_ms, || Connection::open_with_flags(path, flags))
    }

    /// Detached in-memory readers. Each is a separate empty database, so the
    /// engine never reads through them.
    pub fn open_in_memory(size: usize) -> SahayakResult<Self> {
        Self::build(size, DEFAULT_BUSY_TIMEOUT_MS, Connection::open_in_memory)
    }

    fn build<F>(size: usize, busy_timeout_ms: u32, mut connect: F) -> SahayakResult<Self>
    where
        F: FnMut() -> rusqlite::Result<Connection>,
    {
        let readers = (0..size.clamp(1, MAX_READERS))
            .map(|_| {
                let conn = connect().map_err(|e| to_storage_err(e.to_string()))?;
                apply_read_pragmas(&conn, busy_timeout_ms)?;
                Ok(Mutex::new(conn))
            })
            .collect::<SahayakResult<Vec<_>>>()?;
        Ok(Self {
            readers,
            cursor: AtomicUsize::new(0),
        })
    }

    /// Run `f` on the next reader in rotation.
    pub fn with_conn<F, T>(&self, f: F) -> SahayakResult<T>
    where
        F: FnOnce(&Connection) -> SahayakResult<T>,
    {
        let slot = self.cursor.fetch_add(1, Ordering::Relaxed) % self.readers.len();
        let conn = self.readers[slot]
            .lock()
            .map_err(|e| to_storage_err(format!("reader {slot} poisoned: {e}")))?;
        f(&conn)
    }

    pub fn size(&self) -> usize {
        self.readers.len()
    }
}
