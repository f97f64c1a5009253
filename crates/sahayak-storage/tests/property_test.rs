//! Property tests for store ordering and sweep bookkeeping.

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use sahayak_core::models::*;
use sahayak_core::traits::ICacheStore;
use sahayak_storage::compaction::retention;
use sahayak_storage::StorageEngine;

fn artifact(id: String, age_days: i64, now: chrono::DateTime<Utc>) -> CachedArtifact {
    CachedArtifact {
        topic: id.clone(),
        id,
        language: Language::Hi,
        seed: String::new(),
        strategies: vec![],
        ncert_ref: String::new(),
        prefetched: true,
        fetched_at: now - Duration::days(age_days),
        prediction: TopicPrediction {
            topic: "t".into(),
            chapter: "c".into(),
            subject: "maths".into(),
            grade: 6,
            confidence: 0.85,
            reason: PredictionReason::CurrentChapter,
        },
        schema_version: 1,
    }
}

proptest! {
    #[test]
    fn sweep_removes_exactly_the_expired(ages in proptest::collection::vec(0i64..20, 0..25)) {
        let engine = StorageEngine::open_in_memory().unwrap();
        let now = Utc.with_ymd_and_hms(2024, 10, 1, 0, 0, 0).unwrap();
        for (i, age) in ages.iter().enumerate() {
            engine.put_artifact(&artifact(format!("a{i}"), *age, now)).unwrap();
        }

        let expected_removed = ages.iter().filter(|a| **a > 7).count();
        let removed = retention::sweep(&engine, now).unwrap();
        prop_assert_eq!(removed, expected_removed);

        let remaining = engine.all_artifacts().unwrap();
        prop_assert_eq!(remaining.len(), ages.len() - expected_removed);
        prop_assert!(remaining.iter().all(|a| now - a.fetched_at <= Duration::days(7)));
    }
}
