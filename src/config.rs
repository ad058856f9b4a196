//! Configuration system for the simulation driver.
//!
//! Supports YAML configuration files with sensible defaults.

use crate::pattern::Symbols;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub run: RunConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Cell symbols used for pattern files and rendered output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Symbol for a dead cell
    pub dead: char,
    /// Symbol for a living cell
    pub live: char,
}

/// Run-length configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Generations to run, counting the initial pattern as generation 1
    pub generations: u32,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display: DisplayConfig::default(),
            run: RunConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            dead: '.',
            live: 'X',
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self { generations: 4 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if !self.display.dead.is_ascii() || !self.display.live.is_ascii() {
            return Err("cell symbols must be ASCII".to_string());
        }
        if self.display.dead == self.display.live {
            return Err("dead and live symbols must differ".to_string());
        }
        if self.run.generations == 0 {
            return Err("generations must be > 0".to_string());
        }
        Ok(())
    }

    /// The configured alphabet as parser/renderer symbols
    pub fn symbols(&self) -> Symbols {
        Symbols {
            dead: self.display.dead as u8,
            live: self.display.live as u8,
        }
    }
}
