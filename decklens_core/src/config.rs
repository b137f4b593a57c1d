//! Configuration file support for Decklens.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/decklens/config.toml`.
//! Every field has a default, so a missing file or a partial file both
//! work; the defaults reproduce the stock card list format (`;` delimiter,
//! Guard report).

use crate::{Ability, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

/// Card list input configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
        }
    }
}

impl InputConfig {
    /// Delimiter as the single byte the record reader expects
    pub fn delimiter_byte(&self) -> Result<u8> {
        if self.delimiter.is_ascii() {
            Ok(self.delimiter as u8)
        } else {
            Err(Error::Config(format!(
                "delimiter {:?} is not an ASCII character",
                self.delimiter
            )))
        }
    }
}

/// Report defaults configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_ability")]
    pub ability: Ability,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            ability: default_ability(),
        }
    }
}

// Default value functions
fn default_delimiter() -> char {
    ';'
}

fn default_ability() -> Ability {
    Ability::Guard
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::debug!("No config file found at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_default();
            PathBuf::from(home).join(".config")
        });
        base.join("decklens").join("config.toml")
    }
}
