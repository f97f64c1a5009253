use serde::{Deserialize, Serialize};

use super::defaults;

/// Remote playbook / quick-fix API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Base URL of the backend, without the `/api` suffix.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::DEFAULT_REMOTE_BASE_URL.to_string(),
            timeout_secs: defaults::DEFAULT_REMOTE_TIMEOUT_SECS,
        }
    }
}
