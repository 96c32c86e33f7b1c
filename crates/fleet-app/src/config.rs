//! Configuration management for fleet-manager
//!
//! Config stored at: ~/.config/fleet-manager/config.json

use fleet_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Fleet file used to seed the registry
    #[serde(default)]
    pub fleet_file: Option<PathBuf>,

    /// Log level filter (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: default_output_format(),
            fleet_file: None,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("fleet-manager");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from the default location, or defaults if absent
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from `path`, or defaults if absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)).into())
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::SaveError(format!("{}: {}", parent.display(), e)))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Fleet Manager Configuration")?;
        writeln!(f, "===========================")?;
        writeln!(f)?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(
            f,
            "Fleet file:     {}",
            self.fleet_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(none)".to_string())
        )?;
        writeln!(f, "Log level:      {}", self.log_level)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleet_types::Error;

    #[test]
    fn test_load_missing_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            output_format: OutputFormat::Json,
            fleet_file: Some(PathBuf::from("/tmp/fleet.toml")),
            log_level: "debug".to_string(),
        };
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"output_format": "json"}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.fleet_file, None);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        let result = Config::load_from(&path);
        assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
    }

    #[test]
    fn test_display() {
        let rendered = Config::default().to_string();
        assert!(rendered.contains("Output format:  table"));
        assert!(rendered.contains("Fleet file:     (none)"));
    }
}
