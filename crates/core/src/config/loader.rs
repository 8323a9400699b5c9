//! Configuration file loading

use super::schema::ConfigSchema;
use crate::error::{Error, ErrorCode, Result};
use std::path::{Path, PathBuf};

/// Environment variable overriding `data.catalog`
pub const CATALOG_ENV: &str = "TECHSTORE_CATALOG";

const COMBINATORS: &[&str] = &["and", "or"];
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Configuration wrapper
#[derive(Debug, Clone)]
pub struct Config {
    pub schema: ConfigSchema,
    pub path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema: ConfigSchema::default(),
            path: None,
        }
    }
}

impl Config {
    /// Load configuration from a file path or use defaults.
    ///
    /// An explicit path must exist. Without one, the standard locations are
    /// searched and defaults are used when none exists.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) if !p.exists() => return Err(Error::config_not_found(p)),
            Some(p) => Some(p.to_path_buf()),
            None => find_config_file(),
        };

        let schema = match &config_path {
            Some(p) => load_config_file(p)?,
            None => ConfigSchema::default(),
        };

        let mut config = Self {
            schema,
            path: config_path,
        };
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config = Self {
            schema: toml::from_str(content)?,
            path: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check values serde cannot check on its own.
    pub fn validate(&self) -> Result<()> {
        let combinator = self.schema.search.combinator.to_lowercase();
        if !COMBINATORS.contains(&combinator.as_str()) {
            return Err(Error::invalid_config_value(
                "search.combinator",
                &self.schema.search.combinator,
                "\"and\" or \"or\"",
            ));
        }

        let level = self.schema.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(Error::invalid_config_value(
                "logging.level",
                &self.schema.logging.level,
                "one of trace, debug, info, warn, error, off",
            ));
        }

        Ok(())
    }

    fn apply_env(&mut self) {
        if let Ok(catalog) = std::env::var(CATALOG_ENV) {
            if !catalog.trim().is_empty() {
                self.schema.data.catalog = Some(catalog);
            }
        }
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<PathBuf> {
    let candidates = ["techstore.toml", ".techstore.toml", ".config/techstore.toml"];

    for candidate in candidates {
        let path = Path::new(candidate);
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    dirs::config_dir()
        .map(|dir| dir.join("techstore").join("config.toml"))
        .filter(|path| path.exists())
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &Path) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::new(ErrorCode::ConfigError, format!("Failed to read config file {}", path.display()))
            .with_source(e)
    })?;

    toml::from_str(&content).map_err(|e| {
        Error::new(ErrorCode::ConfigParseError, format!("Failed to parse config file {}", path.display()))
            .with_source(e)
    })
}
