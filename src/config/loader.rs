//! Configuration structures and loading logic.

use crate::config::hash_type::HashType;
use crate::error::{Error, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Name of the configuration file.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub flashpoint: FlashpointConfig,

    #[serde(default)]
    pub fpfss: FpfssConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// Flashpoint installation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashpointConfig {
    /// Root of the Flashpoint install (contains `Curations/`).
    #[serde(default = "default_flashpoint_path")]
    pub path: PathBuf,
}

/// Duplicate index service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FpfssConfig {
    /// Base URL of the FPFSS site.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Value of the `login` cookie.
    #[serde(default)]
    pub access_token: Option<String>,
}

/// Lookup options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Digest used for hash lookups.
    #[serde(default)]
    pub hash_type: HashType,

    /// HTTP request timeout.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for FlashpointConfig {
    fn default() -> Self {
        Self {
            path: default_flashpoint_path(),
        }
    }
}

impl Default for FpfssConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            access_token: None,
        }
    }
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            hash_type: HashType::default(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_flashpoint_path() -> PathBuf {
    PathBuf::from(".")
}

fn default_base_url() -> String {
    "https://fpfss.unstable.life".to_string()
}

fn default_timeout() -> u64 {
    30
}

/// Default location of the configuration file.
///
/// Uses the platform config directory, falling back to the working directory.
pub fn default_config_path() -> PathBuf {
    ProjectDirs::from("", "", "gamezip-dupe-checker")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Configuration file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, content)?;
        Ok(())
    }

    /// HTTP timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.options.timeout_seconds)
    }
}
