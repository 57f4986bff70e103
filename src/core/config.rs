//! Serializable logger configuration

use super::error::Result;
use super::timestamp::DEFAULT_TIME_FORMAT;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Declarative logger settings, typically loaded from a JSON file.
///
/// Missing fields take their defaults: no file (standard error), no
/// prefix, and [`DEFAULT_TIME_FORMAT`].
///
/// # Examples
///
/// ```
/// use flg::LoggerConfig;
///
/// let config = LoggerConfig::from_json(r#"{ "prefix": "[api] " }"#).unwrap();
/// assert_eq!(config.prefix, "[api] ");
/// assert_eq!(config.time_format, "%Y-%m-%d %H:%M:%S");
/// assert!(config.filename.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Log file to append to; `None` writes to standard error
    pub filename: Option<PathBuf>,
    /// Text written verbatim before every message
    pub prefix: String,
    /// strftime format for the leading timestamp; empty disables it
    pub time_format: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            filename: None,
            prefix: String::new(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

impl LoggerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize this configuration as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[must_use]
    pub fn with_filename(mut self, filename: impl Into<PathBuf>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_time_format(mut self, format: impl Into<String>) -> Self {
        self.time_format = format.into();
        self
    }
}
