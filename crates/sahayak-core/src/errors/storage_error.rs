/// Local store errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },

    #[error("unreadable {collection} record {key}: {reason}")]
    CorruptRecord {
        collection: String,
        key: String,
        reason: String,
    },

    #[error("store unavailable: {reason}")]
    Unavailable { reason: String },
}
