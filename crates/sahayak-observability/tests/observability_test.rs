use chrono::{Duration, TimeZone, Utc};
use sahayak_core::config::ObservabilityConfig;
use sahayak_observability::degradation::tracker::DEFAULT_EVENT_LIMIT;
use sahayak_observability::{
    init_tracing, init_tracing_with_filter, DegradationEvent, DegradationTracker, RecoveryStatus,
};

fn event(component: &str, at: chrono::DateTime<Utc>) -> DegradationEvent {
    DegradationEvent {
        component: component.to_string(),
        failure: "network unreachable".into(),
        fallback_used: "stale cache".into(),
        timestamp: at,
    }
}

#[test]
fn init_is_idempotent() {
    init_tracing(&ObservabilityConfig::default());
    init_tracing(&ObservabilityConfig::default());
    init_tracing_with_filter("debug");
    let _span = sahayak_observability::prefetch_span!(6u8, "hi").entered();
    tracing::info!("still logging");
}

#[test]
fn tracker_records_and_recovers() {
    let t0 = Utc.with_ymd_and_hms(2024, 7, 1, 9, 0, 0).unwrap();
    let mut tracker = DegradationTracker::new();
    tracker.record(event("quick_fixes", t0));
    tracker.record(event("quick_fixes", t0 + Duration::minutes(5)));
    tracker.record(event("lessons", t0 + Duration::minutes(6)));

    assert!(tracker.is_degraded("quick_fixes"));
    assert_eq!(
        tracker.degraded_duration("quick_fixes", t0 + Duration::minutes(10)),
        Some(Duration::minutes(10))
    );

    tracker.mark_recovered("quick_fixes", t0 + Duration::minutes(11));
    assert!(!tracker.is_degraded("quick_fixes"));
    assert_eq!(tracker.active_degradations().len(), 1);
    assert!(tracker
        .events()
        .iter()
        .filter(|t| t.event.component == "quick_fixes")
        .all(|t| t.recovery_status == RecoveryStatus::Recovered));
    assert!(tracker.degraded_duration("quick_fixes", t0).is_none());
}

#[test]
fn tracker_prunes_recovered_events_first_when_full() {
    let t0 = Utc.with_ymd_and_hms(2024, 7, 1, 9, 0, 0).unwrap();
    let mut tracker = DegradationTracker::with_limit(3);
    tracker.record(event("lessons", t0));
    tracker.mark_recovered("lessons", t0 + Duration::minutes(1));
    tracker.record(event("quick_fixes", t0 + Duration::minutes(2)));
    tracker.record(event("quick_fixes", t0 + Duration::minutes(3)));
    tracker.record(event("quick_fixes", t0 + Duration::minutes(4)));

    assert_eq!(tracker.events().len(), 3);
    assert!(tracker.events().iter().all(|t| t.event.component == "quick_fixes"));
    assert_eq!(
        tracker.degraded_duration("quick_fixes", t0 + Duration::minutes(5)),
        Some(Duration::minutes(3))
    );
}

#[test]
fn tracker_stays_bounded_under_sustained_failure() {
    let t0 = Utc.with_ymd_and_hms(2024, 7, 1, 9, 0, 0).unwrap();
    let mut tracker = DegradationTracker::new();
    for minute in 0..1_000 {
        tracker.record(event("quick_fixes", t0 + Duration::minutes(minute)));
    }
    assert_eq!(tracker.events().len(), DEFAULT_EVENT_LIMIT);
    assert_eq!(
        tracker.events().last().unwrap().event.timestamp,
        t0 + Duration::minutes(999)
    );
    assert!(tracker.is_degraded("quick_fixes"));
}
