// src/config.rs

//! Configuration for the `while-lexer` driver.
//!
//! Settings are deserialized from JSON. Every section carries
//! `#[serde(default)]`, so a file only needs the fields it changes and an
//! empty object is a valid configuration.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root of the configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Scanner settings.
    pub scanner: ScannerConfig,
    /// How results are printed.
    pub output: OutputConfig,
}

/// Scanner settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ScannerConfig {
    /// Log every scan step (state, buffer, input, boundary) at debug level.
    pub verbose: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// Output format of the driver.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One token per line with its category.
    #[default]
    Text,
    /// The whole analysis as a JSON document.
    Json,
}

impl Config {
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Failed to parse configuration")
    }

    /// Reads and parses a JSON configuration file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json_str(&json)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn empty_object_gives_defaults() {
        let config = Config::from_json_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert!(!config.scanner.verbose);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn partial_sections_are_filled_in() {
        let config = Config::from_json_str(r#"{"output": {"format": "json"}}"#).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.scanner.verbose);

        let config = Config::from_json_str(r#"{"scanner": {"verbose": true}}"#).unwrap();
        assert!(config.scanner.verbose);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn unknown_format_is_an_error() {
        let err = Config::from_json_str(r#"{"output": {"format": "yaml"}}"#).unwrap_err();
        assert!(err.to_string().contains("Failed to parse configuration"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = Config::load(Path::new("/nonexistent/while-lexer.json")).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to read config file"));
    }
}
