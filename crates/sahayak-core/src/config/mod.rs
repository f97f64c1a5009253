//! Configuration with TOML loading, environment overrides, and validation.

pub mod defaults;
pub mod observability_config;
pub mod prefetch_config;
pub mod remote_config;
pub mod request_cache_config;
pub mod retention_config;
pub mod storage_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use observability_config::ObservabilityConfig;
pub use prefetch_config::PrefetchConfig;
pub use remote_config::RemoteConfig;
pub use request_cache_config::RequestCacheConfig;
pub use retention_config::RetentionConfig;
pub use storage_config::StorageConfig;

use crate::errors::ConfigError;

/// Environment variable overriding `storage.db_path`.
pub const ENV_DB_PATH: &str = "SAHAYAK_DB_PATH";

/// Environment variable overriding `remote.base_url`.
pub const ENV_REMOTE_URL: &str = "SAHAYAK_API_URL";

/// Top-level configuration aggregating all sub-configs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SahayakConfig {
    pub storage: StorageConfig,
    pub prefetch: PrefetchConfig,
    pub retention: RetentionConfig,
    pub request_cache: RequestCacheConfig,
    pub remote: RemoteConfig,
    pub observability: ObservabilityConfig,
}

impl SahayakConfig {
    /// Parse configuration from a TOML string. Missing keys take defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, then apply environment overrides.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let mut config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Apply `SAHAYAK_*` environment variables on top of the loaded values.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var(ENV_DB_PATH) {
            if !path.trim().is_empty() {
                self.storage.db_path = path;
            }
        }
        if let Ok(url) = std::env::var(ENV_REMOTE_URL) {
            if !url.trim().is_empty() {
                self.remote.base_url = url;
            }
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.prefetch;
        check_unit_interval("prefetch.current_chapter_confidence", p.current_chapter_confidence)?;
        check_unit_interval("prefetch.next_chapter_confidence", p.next_chapter_confidence)?;
        if p.batch_size == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "prefetch.batch_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if !(1..=defaults::MAX_RETENTION_DAYS).contains(&self.retention.max_age_days) {
            return Err(ConfigError::ValidationFailed {
                field: "retention.max_age_days".to_string(),
                message: format!("must be between 1 and {}", defaults::MAX_RETENTION_DAYS),
            });
        }
        if self.request_cache.max_age_minutes < 0 {
            return Err(ConfigError::ValidationFailed {
                field: "request_cache.max_age_minutes".to_string(),
                message: "must not be negative".to_string(),
            });
        }
        if self.storage.read_pool_size == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "storage.read_pool_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

fn check_unit_interval(field: &str, value: f64) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::ValidationFailed {
            field: field.to_string(),
            message: "must be between 0.0 and 1.0".to_string(),
        });
    }
    Ok(())
}
