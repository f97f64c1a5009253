use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Language;
use crate::constants::SCHEMA_VERSION;

/// A knowledge seed persisted in the local store, keyed by lowercase topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedRecord {
    pub topic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hi: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kn: Option<String>,
    pub fetched_at: DateTime<Utc>,
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
}

impl SeedRecord {
    pub fn new(topic: impl Into<String>, fetched_at: DateTime<Utc>) -> Self {
        Self {
            topic: topic.into(),
            hi: None,
            en: None,
            kn: None,
            fetched_at,
            schema_version: SCHEMA_VERSION,
        }
    }

    /// Store key: topics are matched case-insensitively.
    pub fn key(&self) -> String {
        self.topic.to_lowercase()
    }

    /// Seed text for `language`, if that field is populated.
    pub fn text(&self, language: Language) -> Option<&str> {
        let text = match language {
            Language::Hi => self.hi.as_deref(),
            Language::En => self.en.as_deref(),
            Language::Kn => self.kn.as_deref(),
        };
        text.filter(|t| !t.is_empty())
    }

    pub fn set_text(&mut self, language: Language, text: impl Into<String>) {
        let slot = match language {
            Language::Hi => &mut self.hi,
            Language::En => &mut self.en,
            Language::Kn => &mut self.kn,
        };
        *slot = Some(text.into());
    }
}

/// Result of a seed lookup. `cached` is false when served from the bundled table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedLookup {
    pub topic: String,
    pub seed: String,
    pub cached: bool,
}

pub(crate) fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}
