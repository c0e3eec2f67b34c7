//! CLI configuration
//!
//! Resolved in layers, later layers winning:
//! 1. Built-in defaults
//! 2. Config file (`--config <PATH>`, else `antiphonale.toml` in the working
//!    directory when present)
//! 3. Environment: `ANTIPHONALE_DB`, `ANTIPHONALE_LOG_PROFILE`
//! 4. Flags: `--db`, `--log`
//!
//! ```toml
//! [database]
//! path = ".antiphonale/catalog.db"
//!
//! [logging]
//! profile = "production"
//! ```

use std::path::{Path, PathBuf};

use antiphonale_core::logging_facility::Profile;
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_DB_PATH: &str = ".antiphonale/catalog.db";
pub const DEFAULT_CONFIG_FILE: &str = "antiphonale.toml";
pub const ENV_DB: &str = "ANTIPHONALE_DB";
pub const ENV_LOG_PROFILE: &str = "ANTIPHONALE_LOG_PROFILE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("{0}")]
    InvalidProfile(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    database: DatabaseSection,
    #[serde(default)]
    logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct DatabaseSection {
    path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LoggingSection {
    profile: Option<Profile>,
}

/// Effective configuration after all layers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub log_profile: Profile,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            log_profile: Profile::Development,
        }
    }
}

/// Command-line overrides
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config: Option<PathBuf>,
    pub db: Option<PathBuf>,
    pub log: Option<Profile>,
}

impl AppConfig {
    /// Resolve the configuration from the process environment
    pub fn load(overrides: &Overrides) -> Result<Self, ConfigError> {
        Self::load_with(overrides, |key| std::env::var(key).ok())
    }

    /// Resolve the configuration with an injected environment lookup
    pub fn load_with(
        overrides: &Overrides,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = AppConfig::default();

        let file = match &overrides.config {
            Some(path) => Some(read_file(path)?),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.is_file() {
                    Some(read_file(path)?)
                } else {
                    None
                }
            }
        };
        if let Some(file) = file {
            if let Some(path) = file.database.path {
                config.db_path = path;
            }
            if let Some(profile) = file.logging.profile {
                config.log_profile = profile;
            }
        }

        if let Some(path) = env(ENV_DB).filter(|v| !v.is_empty()) {
            config.db_path = PathBuf::from(path);
        }
        if let Some(profile) = env(ENV_LOG_PROFILE).filter(|v| !v.is_empty()) {
            config.log_profile = profile.parse().map_err(ConfigError::InvalidProfile)?;
        }

        if let Some(path) = &overrides.db {
            config.db_path = path.clone();
        }
        if let Some(profile) = overrides.log {
            config.log_profile = profile;
        }

        Ok(config)
    }
}

fn read_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
