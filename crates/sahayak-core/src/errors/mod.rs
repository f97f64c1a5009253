//! Error taxonomy. `SahayakError` wraps every subsystem error via `From`.

pub mod config_error;
pub mod fetch_error;
pub mod storage_error;

pub use config_error::ConfigError;
pub use fetch_error::FetchError;
pub use storage_error::StorageError;

/// Convenience alias used across the workspace.
pub type SahayakResult<T> = Result<T, SahayakError>;

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum SahayakError {
    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("remote fetch error: {0}")]
    FetchError(#[from] FetchError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("a prefetch run is already in progress (started at {started_at})")]
    PrefetchInProgress { started_at: String },
}
