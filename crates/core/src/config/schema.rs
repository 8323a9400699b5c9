//! Configuration schema definitions

use serde::{Deserialize, Serialize};

/// Root configuration schema
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigSchema {
    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Defaults for advanced product search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Operator used when the user leaves it blank ("and" or "or")
    #[serde(default = "default_combinator")]
    pub combinator: String,

    /// Edit tolerance used when approximate matching is requested without one
    #[serde(default = "default_tolerance")]
    pub tolerance: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            combinator: default_combinator(),
            tolerance: default_tolerance(),
        }
    }
}

fn default_combinator() -> String {
    "and".to_string()
}

fn default_tolerance() -> usize {
    1
}

/// Where records come from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    /// JSON catalog file; the built-in sample is used when unset
    #[serde(default)]
    pub catalog: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file; logs go to stderr when unset
    #[serde(default)]
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
