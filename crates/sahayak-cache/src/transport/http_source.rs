//! Blocking HTTP source for the quick-fix collection.

use std::time::Duration;

use sahayak_core::config::RemoteConfig;
use sahayak_core::errors::FetchError;
use sahayak_core::traits::RemoteSource;

use super::quick_fixes_path;

/// GETs `{base_url}{path}` and returns the item array found under `field`.
#[derive(Debug, Clone)]
pub struct HttpRemoteSource {
    url: String,
    #[cfg_attr(not(feature = "remote"), allow(dead_code))]
    field: String,
    #[cfg_attr(not(feature = "remote"), allow(dead_code))]
    timeout: Duration,
}

impl HttpRemoteSource {
    pub fn new(base_url: &str, path: &str, field: &str, timeout: Duration) -> Self {
        Self {
            url: format!("{}{}", base_url.trim_end_matches('/'), path),
            field: field.to_string(),
            timeout,
        }
    }

    /// The quick-fix endpoint with `limit` items.
    pub fn quick_fixes(config: &RemoteConfig, limit: usize) -> Self {
        Self::new(
            &config.base_url,
            &quick_fixes_path(limit),
            "fixes",
            Duration::from_secs(config.timeout_secs),
        )
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl RemoteSource for HttpRemoteSource {
    #[cfg(feature = "remote")]
    fn fetch(&self) -> Result<serde_json::Value, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .gzip(true)
            .build()
            .map_err(|e| FetchError::Network {
                reason: e.to_string(),
            })?;

        let response = client.get(&self.url).send().map_err(|e| FetchError::Network {
            reason: e.to_string(),
        })?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body: serde_json::Value = response.json().map_err(|e| FetchError::InvalidPayload {
            reason: format!("deserialization failed: {e}"),
        })?;
        super::extract_items(body, &self.field)
    }

    #[cfg(not(feature = "remote"))]
    fn fetch(&self) -> Result<serde_json::Value, FetchError> {
        Err(FetchError::Network {
            reason: "remote feature not enabled".into(),
        })
    }
}
