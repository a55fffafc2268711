//! Configuration file support for Streakfit.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/streakfit/config.toml`.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub streak: StreakConfig,
}

/// Data storage configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Streak and economy policy parameters.
///
/// The freeze lookback is policy, not a law of the domain: gaps older than
/// this many days are never auto-healed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StreakConfig {
    #[serde(default = "default_freeze_cost")]
    pub freeze_cost: u32,

    #[serde(default = "default_completion_points")]
    pub completion_points: u32,

    #[serde(default = "default_freeze_lookback_days")]
    pub freeze_lookback_days: u32,
}

impl Default for StreakConfig {
    fn default() -> Self {
        Self {
            freeze_cost: default_freeze_cost(),
            completion_points: default_completion_points(),
            freeze_lookback_days: default_freeze_lookback_days(),
        }
    }
}

// Default value functions
fn default_data_dir() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| {
        let home = std::env::var("HOME").expect("HOME environment variable not set");
        PathBuf::from(home).join(".local/share")
    });
    base.join("streakfit")
}

fn default_freeze_cost() -> u32 {
    50
}

fn default_completion_points() -> u32 {
    10
}

fn default_freeze_lookback_days() -> u32 {
    4
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("streakfit").join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.streak.freeze_cost, 50);
        assert_eq!(config.streak.completion_points, 10);
        assert_eq!(config.streak.freeze_lookback_days, 4);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(config.streak.freeze_cost, parsed.streak.freeze_cost);
        assert_eq!(
            config.streak.freeze_lookback_days,
            parsed.streak.freeze_lookback_days
        );
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[streak]
freeze_lookback_days = 7
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.streak.freeze_lookback_days, 7);
        assert_eq!(config.streak.freeze_cost, 50); // default
    }
}
