use chrono::{TimeZone, Utc};
use sahayak_cache::OfflineQueue;
use sahayak_storage::StorageEngine;
use serde_json::json;

fn queue() -> OfflineQueue<StorageEngine> {
    OfflineQueue::new(StorageEngine::open_in_memory().unwrap())
}

#[test]
fn add_stamps_id_and_time() {
    let queue = queue();
    let at = Utc.with_ymd_and_hms(2024, 8, 5, 9, 0, 0).unwrap();
    let entry = queue
        .add_at(json!({"problem": "students not listening", "grade": 6}), at)
        .unwrap();
    assert!(entry.id.starts_with("offline_"));
    assert_eq!(entry.queued_at, at);
    assert_eq!(queue.all().unwrap(), vec![entry]);
}

#[test]
fn ids_are_unique_within_one_instant() {
    let queue = queue();
    let at = Utc::now();
    let a = queue.add_at(json!({}), at).unwrap();
    let b = queue.add_at(json!({}), at).unwrap();
    assert_ne!(a.id, b.id);
    assert_eq!(queue.count().unwrap(), 2);
}

#[test]
fn remove_and_clear() {
    let queue = queue();
    let first = queue.add(json!({"n": 1})).unwrap();
    queue.add(json!({"n": 2})).unwrap();
    queue.add(json!({"n": 3})).unwrap();

    assert!(queue.remove(&first.id).unwrap());
    assert!(!queue.remove("offline_missing").unwrap());
    let remaining: Vec<_> = queue.all().unwrap().into_iter().map(|e| e.request["n"].clone()).collect();
    assert_eq!(remaining, vec![json!(2), json!(3)]);

    assert_eq!(queue.clear().unwrap(), 2);
    assert_eq!(queue.count().unwrap(), 0);
    assert_eq!(queue.clear().unwrap(), 0);
}
