//! TOML-based application configuration.
//!
//! Stores presentation-facing preferences. The engine never reads these;
//! the CLI uses them when rendering (e.g. the monthly target that the
//! progress percentage is derived from).
//!
//! Configuration is stored at `~/.config/sixwell/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;

/// Goal configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalConfig {
    /// Check-ins per dimension that count as a "full ring" for display
    /// purposes. Purely presentational; the tracker keeps counting past it.
    #[serde(default = "default_monthly_target")]
    pub monthly_target: u32,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/sixwell/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub goal: GoalConfig,
}

fn default_monthly_target() -> u32 {
    30
}

impl Default for GoalConfig {
    fn default() -> Self {
        Self {
            monthly_target: default_monthly_target(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, Box<dyn std::error::Error>> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk or return default.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content)?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(Self::path()?, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let cfg: Config = toml::from_str("").unwrap();
        assert_eq!(cfg.goal.monthly_target, 30);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let cfg: Config = toml::from_str("[goal]\nmonthly_target = 21\n").unwrap();
        assert_eq!(cfg.goal.monthly_target, 21);
    }

    #[test]
    fn round_trips_through_toml() {
        let cfg = Config {
            goal: GoalConfig { monthly_target: 14 },
        };
        let text = toml::to_string_pretty(&cfg).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back, cfg);
    }
}
