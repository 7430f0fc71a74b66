//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use quill_infra::DEFAULT_STORAGE_KEY;

pub const DEFAULT_DATA_FILE: &str = "quill-data.json";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// File holding the key-value store.
    pub data_file: PathBuf,
    /// Key the post collection is stored under.
    pub storage_key: String,
    /// Refuse to start on malformed stored data instead of starting empty.
    pub strict_load: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            data_file: lookup("QUILL_DATA_FILE")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE)),
            storage_key: lookup("QUILL_STORAGE_KEY")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string()),
            strict_load: lookup("QUILL_STRICT_LOAD")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
        }
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_overrides(
        mut self,
        data_file: Option<PathBuf>,
        storage_key: Option<String>,
        strict: bool,
    ) -> Self {
        if let Some(path) = data_file {
            self.data_file = path;
        }
        if let Some(key) = storage_key {
            self.storage_key = key;
        }
        self.strict_load |= strict;
        self
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
