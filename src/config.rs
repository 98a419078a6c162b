//! Configuration management module.
//!
//! Supports loading configuration from:
//! - TOML files (config/default.toml, config/{profile}.toml)
//! - Environment variables with `PREFSTORE__<SECTION>__<KEY>` pattern

use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Store backend type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// In-memory store (tests/session-scoped).
    #[default]
    Memory,
    /// File-based store (persistent single-node).
    File,
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Memory => write!(f, "memory"),
            Self::File => write!(f, "file"),
        }
    }
}

/// Store configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreConfig {
    /// Store backend type.
    #[serde(default)]
    pub backend: BackendKind,

    /// In-memory store configuration.
    #[serde(default)]
    pub memory: MemoryStoreConfig,

    /// File store configuration.
    #[serde(default)]
    pub file: FileStoreConfig,
}

impl StoreConfig {
    /// Load configuration from files and environment.
    ///
    /// Configuration is loaded in the following order (later sources
    /// override earlier):
    /// 1. `config/default.toml`
    /// 2. `config/{PREFSTORE_PROFILE}.toml` (if `PREFSTORE_PROFILE` is set)
    /// 3. Environment variables with `PREFSTORE__` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        // Determine profile
        let profile =
            std::env::var("PREFSTORE_PROFILE").unwrap_or_else(|_| "development".to_string());

        // Build configuration
        let config = Config::builder()
            // Load default configuration
            .add_source(File::with_name("config/default").required(false))
            // Load profile-specific configuration
            .add_source(File::with_name(&format!("config/{profile}")).required(false))
            // Override with environment variables
            // PREFSTORE__FILE__DATA_DIR=/var/lib/prefs -> file.data_dir = /var/lib/prefs
            .add_source(
                Environment::with_prefix("PREFSTORE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        // Deserialize and validate
        let store_config: Self = config.try_deserialize()?;
        store_config.validate()?;

        Ok(store_config)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing or out of range for
    /// the selected backend.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.backend {
            BackendKind::Memory => {
                if self.memory.quota_bytes == Some(0) {
                    return Err(ConfigError::Message(
                        "memory.quota_bytes cannot be 0".to_string(),
                    ));
                }
                Ok(())
            }
            BackendKind::File => {
                if self.file.data_dir.as_os_str().is_empty() {
                    return Err(ConfigError::Message(
                        "file.data_dir cannot be empty".to_string(),
                    ));
                }
                Ok(())
            }
        }
    }
}

/// In-memory store configuration.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct MemoryStoreConfig {
    /// Optional cap on total bytes held across keys and values.
    #[serde(default)]
    pub quota_bytes: Option<usize>,
}

/// File store configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct FileStoreConfig {
    /// Directory for storing entry files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./prefs")
}

impl Default for FileStoreConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}
