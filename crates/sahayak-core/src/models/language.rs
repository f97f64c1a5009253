use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Languages the cache carries seed text and strategies for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Hindi.
    Hi,
    /// English. Ultimate fallback for seed text.
    En,
    /// Kannada.
    Kn,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Hi, Language::En, Language::Kn];

    /// ISO 639-1 code.
    pub fn code(self) -> &'static str {
        match self {
            Language::Hi => "hi",
            Language::En => "en",
            Language::Kn => "kn",
        }
    }

    /// Parse an ISO 639-1 code, case-insensitively.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "hi" => Some(Language::Hi),
            "en" => Some(Language::En),
            "kn" => Some(Language::Kn),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| ConfigError::InvalidValue {
            field: "language".to_string(),
            message: format!("unsupported language code '{s}'"),
        })
    }
}
