//! Configuration file support for rebaja.
//!
//! Configuration is loaded from `~/.config/rebaja/config.toml` with the
//! following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Configuration file
//! 3. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/rebaja/config.toml
//! wheel_max = 90
//! wheel_step = 5
//! initial_pct = 20
//! quick_values = [5, 10, 15, 20, 25, 30, 40, 50]
//! audible_tick = false
//! ```

#![allow(dead_code)]

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{RebajaError, Result};

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Largest selectable percentage on the wheel
    pub wheel_max: Option<i32>,

    /// Wheel step between selectable percentages
    pub wheel_step: Option<i32>,

    /// Percentage selected on startup
    pub initial_pct: Option<i32>,

    /// Quick-select button row
    pub quick_values: Option<Vec<i32>>,

    /// Whether a value change rings the terminal bell
    pub audible_tick: Option<bool>,
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if the file doesn't exist or can't be
    /// parsed.
    pub fn load() -> Self {
        match Self::try_load(Self::config_path()) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: {}", e);
                Self::default()
            }
        }
    }

    fn try_load(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(&path)?;
        toml::from_str(&contents)
            .map_err(|e| RebajaError::Config(format!("failed to parse {}: {}", path.display(), e)))
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rebaja")
            .join("config.toml")
    }

    pub fn wheel_max(&self) -> i32 {
        self.wheel_max.unwrap_or(90)
    }

    pub fn wheel_step(&self) -> i32 {
        self.wheel_step.unwrap_or(1).max(1)
    }

    pub fn initial_pct(&self) -> i32 {
        self.initial_pct.unwrap_or(30)
    }

    pub fn quick_values(&self) -> Vec<i32> {
        self.quick_values
            .clone()
            .unwrap_or_else(|| vec![10, 20, 30, 40, 50, 60, 70, 80])
    }

    pub fn audible_tick(&self) -> bool {
        self.audible_tick.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.wheel_max(), 90);
        assert_eq!(config.wheel_step(), 1);
        assert_eq!(config.initial_pct(), 30);
        assert_eq!(config.quick_values(), vec![10, 20, 30, 40, 50, 60, 70, 80]);
        assert!(config.audible_tick());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
            wheel_max = 50
            wheel_step = 5
            initial_pct = 15
            quick_values = [5, 15, 25]
            audible_tick = false
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.wheel_max(), 50);
        assert_eq!(config.wheel_step(), 5);
        assert_eq!(config.initial_pct(), 15);
        assert_eq!(config.quick_values(), vec![5, 15, 25]);
        assert!(!config.audible_tick());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: Config = toml::from_str("wheel_step = 10").unwrap();
        assert_eq!(config.wheel_step(), 10);
        assert_eq!(config.wheel_max(), 90);
        assert!(config.audible_tick());
    }

    #[test]
    fn test_zero_step_normalized() {
        let config: Config = toml::from_str("wheel_step = 0").unwrap();
        assert_eq!(config.wheel_step(), 1);
    }
}
