//! File-backed mode: data survives reopen and the read pool sees committed writes.

use chrono::Utc;
use sahayak_core::constants::SYNC_META_KEY;
use sahayak_core::models::*;
use sahayak_core::traits::ICacheStore;
use sahayak_storage::pool::pragmas::verify_wal_mode;
use sahayak_storage::StorageEngine;

fn meta(count: usize) -> SyncMeta {
    SyncMeta {
        key: SYNC_META_KEY.into(),
        timestamp: Utc::now(),
        topics_count: count,
        grade: 5,
        language: Language::En,
        schema_version: 1,
    }
}

#[test]
fn data_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cache.db");
    {
        let engine = StorageEngine::open(&path).unwrap();
        engine.put_sync_meta(&meta(7)).unwrap();
        let mut seed = SeedRecord::new("algebra", Utc::now());
        seed.set_text(Language::En, "Letters represent numbers");
        engine.put_seed(&seed).unwrap();
    }
    let engine = StorageEngine::open(&path).unwrap();
    assert_eq!(
        engine.get_sync_meta(SYNC_META_KEY).unwrap().unwrap().topics_count,
        7
    );
    assert!(engine.get_seed("Algebra").unwrap().is_some());
}

#[test]
fn read_pool_sees_writer_commits() {
    let dir = tempfile::tempdir().unwrap();
    let engine = StorageEngine::open(&dir.path().join("cache.db")).unwrap();
    // Each call round-robins to a different reader.
    for count in 1..=engine.pool().readers.size() + 1 {
        engine.put_sync_meta(&meta(count)).unwrap();
        let loaded = engine.get_sync_meta(SYNC_META_KEY).unwrap().unwrap();
        assert_eq!(loaded.topics_count, count);
    }
}

#[test]
fn file_backed_writer_uses_wal() {
    let dir = tempfile::tempdir().unwrap();
    let engine = StorageEngine::open(&dir.path().join("cache.db")).unwrap();
    let wal = engine
        .pool()
        .writer
        .with_conn_sync(verify_wal_mode)
        .unwrap();
    assert!(wal);
    engine.compact().unwrap();
}
