/// Sahayak cache version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Schema version stamped on every persisted record.
pub const SCHEMA_VERSION: u32 = 1;

/// Start of the curriculum calendar: 2024-06-01T00:00:00Z, in Unix seconds.
pub const CURRICULUM_EPOCH_SECS: i64 = 1_717_200_000;

/// Length of one curriculum week in seconds.
pub const CURRICULUM_WEEK_SECS: i64 = 7 * 24 * 60 * 60;

/// Key of the single sync-metadata record written by each prefetch run.
pub const SYNC_META_KEY: &str = "lastPrefetch";

/// Fixed id of the schedule snapshot record.
pub const SCHEDULE_SNAPSHOT_ID: &str = "current";

/// Request-cache key for the quick-fix collection.
pub const QUICK_FIXES_KEY: &str = "quick_fixes";

/// Cache type reported on speculative lookup hits.
pub const CACHE_TYPE_SPECULATIVE: &str = "speculative";

/// Subjects the prefetch scheduler predicts for when none are configured.
pub const DEFAULT_PREFETCH_SUBJECTS: [&str; 2] = ["maths", "science"];

/// Subjects listed by the upcoming-lessons view.
pub const LESSON_SUBJECTS: [&str; 4] = ["maths", "science", "hindi", "english"];
