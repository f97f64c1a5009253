//! End-to-end flows through CacheClient.

use chrono::{DateTime, Duration, TimeZone, Utc};
use sahayak_core::config::SahayakConfig;
use sahayak_core::errors::{FetchError, SahayakError};
use sahayak_core::models::{Language, LessonDay};
use sahayak_core::traits::RemoteSource;
use sahayak_runtime::CacheClient;
use serde_json::{json, Value};

fn week_six() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 7, 14, 10, 0, 0).unwrap()
}

fn client() -> CacheClient {
    CacheClient::open_in_memory(SahayakConfig::default()).unwrap()
}

struct FixedSource(Result<Value, FetchError>);

impl RemoteSource for FixedSource {
    fn fetch(&self) -> Result<Value, FetchError> {
        self.0.clone()
    }
}

#[test]
fn prefetch_then_offline_lookup() {
    let client = client();
    let outcome = client.run_prefetch_at(6, Language::Hi, week_six(), None).unwrap();
    assert_eq!(outcome.prefetched_count, 10);

    client.set_online(false);
    let hit = client.lookup("photosynthesis").unwrap().unwrap();
    assert_eq!(hit.artifact.language, Language::Hi);
    assert!(hit.artifact.seed.starts_with("प्रकाश संश्लेषण"));

    let seed = client.get_seed("photosynthesis", Language::Hi).unwrap().unwrap();
    assert!(seed.cached);

    let stats = client.cache_stats().unwrap();
    assert_eq!(stats.total_playbooks, 10);
    assert_eq!(stats.last_sync, Some(week_six()));
}

#[test]
fn prefetched_topics_and_schedule_after_run() {
    let client = client();
    assert!(client.schedule().unwrap().is_none());
    client.run_prefetch_at(6, Language::En, week_six(), None).unwrap();

    let topics = client.prefetched_topics().unwrap();
    assert_eq!(topics.total_cached, 10);

    let schedule = client.schedule().unwrap().unwrap();
    assert_eq!(schedule.lessons, client.upcoming_lessons_at(6, week_six()));
    assert_eq!(schedule.lessons[1].day, LessonDay::Tomorrow);
}

#[test]
fn cleanup_applies_retention_config() {
    let config = SahayakConfig::from_toml("[retention]\nmax_age_days = 3\n").unwrap();
    let client = CacheClient::open_in_memory(config).unwrap();
    client.run_prefetch_at(6, Language::En, week_six(), None).unwrap();
    assert_eq!(client.cleanup_at(week_six() + Duration::days(2)).unwrap(), 0);
    assert_eq!(client.cleanup_at(week_six() + Duration::days(4)).unwrap(), 10);
    assert!(client.lookup("fractions").unwrap().is_none());
}

#[test]
fn quick_fixes_cache_first_with_stale_fallback() {
    let client = client();
    let online = FixedSource(Ok(json!([{"title": "Clap pattern"}])));
    let down = FixedSource(Err(FetchError::Network {
        reason: "timeout".into(),
    }));

    let first = client.quick_fixes_at(&online, week_six()).unwrap();
    assert!(!first.from_cache);

    let fresh = client
        .quick_fixes_at(&down, week_six() + Duration::minutes(30))
        .unwrap();
    assert!(fresh.from_cache && !fresh.degraded);

    let stale = client
        .quick_fixes_at(&down, week_six() + Duration::minutes(90))
        .unwrap();
    assert!(stale.degraded);
    assert_eq!(stale.payload, json!([{"title": "Clap pattern"}]));
}

#[test]
fn quick_fixes_without_cache_or_network_fails() {
    let client = client();
    client.set_online(false);
    let err = client
        .quick_fixes_at(&FixedSource(Ok(json!([]))), week_six())
        .unwrap_err();
    assert!(matches!(err, SahayakError::FetchError(FetchError::Offline)));
}

#[test]
fn offline_queue_through_client() {
    let client = client();
    let entry = client
        .offline_queue()
        .add(json!({"problem": "noisy class", "grade": 6}))
        .unwrap();
    assert_eq!(client.offline_queue().count().unwrap(), 1);
    assert!(client.offline_queue().remove(&entry.id).unwrap());
    assert_eq!(client.offline_queue().count().unwrap(), 0);
}

#[test]
fn quick_fix_source_uses_remote_config() {
    let config = SahayakConfig::from_toml(
        "[remote]\nbase_url = \"http://school-server:8000\"\n[request_cache]\nquick_fix_limit = 20\n",
    )
    .unwrap();
    let client = CacheClient::open_in_memory(config).unwrap();
    assert_eq!(
        client.quick_fix_source().url(),
        "http://school-server:8000/api/sos/quick-fixes?limit=20"
    );
}

#[test]
fn invalid_config_is_rejected() {
    let mut config = SahayakConfig::default();
    config.prefetch.batch_size = 0;
    assert!(matches!(
        CacheClient::open_in_memory(config),
        Err(SahayakError::ConfigError(_))
    ));
}

#[test]
fn file_backed_client_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = SahayakConfig::default();
    config.storage.db_path = dir.path().join("sahayak.db").display().to_string();

    {
        let client = CacheClient::open(config.clone()).unwrap();
        client.run_prefetch_at(6, Language::Kn, week_six(), None).unwrap();
    }
    let client = CacheClient::open(config).unwrap();
    let stats = client.cache_stats().unwrap();
    assert_eq!(stats.total_playbooks, 10);
    assert_eq!(stats.total_seeds, 1);
    let hit = client.lookup("skeleton").unwrap().unwrap();
    assert_eq!(hit.artifact.strategies[2].title, "ಗುಂಪು ಚಟುವಟಿಕೆ");
}

#[test]
fn config_file_loading() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("cache.db");
    let config_path = dir.path().join("sahayak.toml");
    std::fs::write(
        &config_path,
        format!(
            "[storage]\ndb_path = \"{}\"\n[prefetch]\ngrade = 5\nlanguage = \"en\"\nsubjects = [\"maths\", \"evs\"]\n",
            db.display()
        ),
    )
    .unwrap();

    let client = CacheClient::from_config_file(&config_path).unwrap();
    assert_eq!(client.config().prefetch.grade, 5);
    let outcome = client.run_default_prefetch().unwrap();
    assert!(outcome.success);
    assert!(client
        .prefetched_topics()
        .unwrap()
        .topics
        .iter()
        .all(|t| t.confidence > 0.0));
}
