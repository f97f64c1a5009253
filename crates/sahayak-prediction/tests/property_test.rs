//! Property tests: ranking order, next-chapter cap, determinism, batch cap.

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use sahayak_core::config::{PrefetchConfig, RetentionConfig};
use sahayak_core::models::{Language, PredictionReason};
use sahayak_prediction::{curriculum_week, predict_topics, PrefetchEngine};
use sahayak_storage::StorageEngine;

fn instant(offset_hours: i64) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap() + Duration::hours(offset_hours)
}

const SUBJECTS: [&str; 5] = ["maths", "science", "hindi", "english", "evs"];

proptest! {
    #[test]
    fn ranking_is_descending_and_current_first(
        offset in -5_000i64..20_000,
        grade in 4u8..8,
    ) {
        let predictions = predict_topics(grade, &SUBJECTS, instant(offset), &PrefetchConfig::default());
        for pair in predictions.windows(2) {
            prop_assert!(pair[0].confidence >= pair[1].confidence);
        }
        let first_next = predictions
            .iter()
            .position(|p| p.reason == PredictionReason::NextChapter)
            .unwrap_or(predictions.len());
        prop_assert!(predictions[first_next..].iter().all(|p| p.reason == PredictionReason::NextChapter));
    }

    #[test]
    fn at_most_two_next_chapter_topics_per_subject(offset in -5_000i64..20_000) {
        let predictions = predict_topics(6, &SUBJECTS, instant(offset), &PrefetchConfig::default());
        for subject in SUBJECTS {
            let next = predictions
                .iter()
                .filter(|p| p.subject == subject && p.reason == PredictionReason::NextChapter)
                .count();
            prop_assert!(next <= 2);
        }
    }

    #[test]
    fn same_week_gives_same_ranking(week in -50i64..200, a in 0i64..168, b in 0i64..168) {
        let start = week * 168;
        let first = predict_topics(6, &SUBJECTS, instant(start + a), &PrefetchConfig::default());
        let second = predict_topics(6, &SUBJECTS, instant(start + b), &PrefetchConfig::default());
        prop_assert_eq!(curriculum_week(instant(start + a)), week);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn run_never_exceeds_batch_size(batch in 1usize..15, offset in 0i64..10_000) {
        let engine = PrefetchEngine::new(
            StorageEngine::open_in_memory().unwrap(),
            PrefetchConfig { batch_size: batch, ..PrefetchConfig::default() },
            RetentionConfig::default(),
        );
        let now = instant(offset);
        let predicted = engine.predict(6, now).len();
        let outcome = engine.run_prefetch_at(6, Language::Hi, now, None).unwrap();
        prop_assert_eq!(outcome.prefetched_count, batch.min(predicted));
    }
}
