use serde::{Deserialize, Serialize};

use super::defaults;

/// Retention sweep configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetentionConfig {
    /// Artifacts fetched more than this many days ago are removed by a sweep.
    pub max_age_days: i64,
}

impl RetentionConfig {
    /// Saturates at `TimeDelta::MAX` for windows chrono cannot represent.
    pub fn max_age(&self) -> chrono::Duration {
        chrono::Duration::try_days(self.max_age_days).unwrap_or(chrono::Duration::MAX)
    }
}

impl Default for RetentionConfig {
    fn default() -> Self {
        Self {
            max_age_days: defaults::DEFAULT_RETENTION_DAYS,
        }
    }
}
