// Single source of truth for all default values.

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "sahayak_cache.db";
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;
pub const DEFAULT_READ_POOL_SIZE: usize = 4;

// --- Prefetch ---
pub const DEFAULT_GRADE: u8 = 6;
pub const DEFAULT_BATCH_SIZE: usize = 10;
pub const DEFAULT_CURRENT_CHAPTER_CONFIDENCE: f64 = 0.85;
pub const DEFAULT_NEXT_CHAPTER_CONFIDENCE: f64 = 0.4;
pub const DEFAULT_NEXT_CHAPTER_TOPIC_LIMIT: usize = 2;
pub const DEFAULT_PREDICTION_CACHE_CAPACITY: u64 = 256;

// --- Retention ---
pub const DEFAULT_RETENTION_DAYS: i64 = 7;
pub const MAX_RETENTION_DAYS: i64 = 36_500;

// --- Request cache ---
pub const DEFAULT_MAX_AGE_MINUTES: i64 = 60;
pub const DEFAULT_QUICK_FIX_LIMIT: usize = 50;

// --- Remote ---
pub const DEFAULT_REMOTE_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_REMOTE_TIMEOUT_SECS: u64 = 10;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
