use sahayak_core::errors::*;

#[test]
fn storage_error_converts_to_sahayak_error() {
    let storage_err = StorageError::SqliteError {
        message: "disk full".into(),
    };
    let err: SahayakError = storage_err.into();
    assert!(matches!(err, SahayakError::StorageError(_)));
    assert!(err.to_string().contains("disk full"));
}

#[test]
fn fetch_error_converts_to_sahayak_error() {
    let err: SahayakError = FetchError::Status { status: 503 }.into();
    assert!(matches!(err, SahayakError::FetchError(FetchError::Status { status: 503 })));
    assert!(err.to_string().contains("503"));
}

#[test]
fn corrupt_record_carries_collection_and_key() {
    let err = StorageError::CorruptRecord {
        collection: "artifacts".into(),
        key: "fractions_hi_1".into(),
        reason: "missing field".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("artifacts"));
    assert!(msg.contains("fractions_hi_1"));
}

#[test]
fn prefetch_in_progress_carries_start_time() {
    let err = SahayakError::PrefetchInProgress {
        started_at: "2024-07-01T10:00:00Z".into(),
    };
    assert!(err.to_string().contains("2024-07-01T10:00:00Z"));
}
