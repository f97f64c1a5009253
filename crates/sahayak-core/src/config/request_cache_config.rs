use serde::{Deserialize, Serialize};

use super::defaults;

/// Freshness policy for server-fetched collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestCacheConfig {
    /// Entries older than this are revalidated against the remote source.
    pub max_age_minutes: i64,
    /// Number of quick fixes requested from the remote API.
    pub quick_fix_limit: usize,
}

impl Default for RequestCacheConfig {
    fn default() -> Self {
        Self {
            max_age_minutes: defaults::DEFAULT_MAX_AGE_MINUTES,
            quick_fix_limit: defaults::DEFAULT_QUICK_FIX_LIMIT,
        }
    }
}
