//! SQLite connections: one serialized writer plus a reader rotation.

pub mod pragmas;
pub mod read_pool;
pub mod write_connection;

use std::path::{Path, PathBuf};

use sahayak_core::errors::SahayakResult;

pub use read_pool::ReadPool;
pub use write_connection::WriteConnection;

pub struct ConnectionPool {
    pub writer: WriteConnection,
    pub readers: ReadPool,
    /// `None` for in-memory stores, whose reads must go through the writer.
    pub db_path: Option<PathBuf>,
}

impl ConnectionPool {
    /// The writer opens first: it creates the file and switches it to WAL
    /// before any read-only connection attaches.
    pub fn open(path: &Path, read_pool_size: usize, busy_timeout_ms: u32) -> SahayakResult<Self> {
        let writer = WriteConnection::open(path, busy_timeout_ms)?;
        Ok(Self {
            writer,
            readers: ReadPool::open(path, read_pool_size, busy_timeout_ms)?,
            db_path: Some(path.to_path_buf()),
        })
    }

    pub fn open_in_memory() -> SahayakResult<Self> {
        Ok(Self {
            writer: WriteConnection::open_in_memory()?,
            readers: ReadPool::open_in_memory(1)?,
            db_path: None,
        })
    }

    pub fn is_in_memory(&self) -> bool {
        self.db_path.is_none()
    }
}
