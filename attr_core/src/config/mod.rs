//! Configuration loading from TOML and JSON files

mod attributes;
mod tables;

pub use attributes::{load_attribute_config, parse_attribute_config};
pub use tables::{load_tables, parse_tables_json, parse_tables_toml};

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Load a JSON file and deserialize it
pub fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = serde_json::from_str(&content)?;
    Ok(config)
}

/// Load a JSON string and deserialize it
pub fn parse_json<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = serde_json::from_str(content)?;
    Ok(config)
}

/// Load a TOML or JSON file, picked by extension
pub fn load_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => load_toml(path),
        Some("json") => load_json(path),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Sample {
        name: String,
        level: u32,
    }

    #[test]
    fn test_parse_both_formats() {
        let from_toml: Sample = parse_toml("name = \"a\"\nlevel = 3").unwrap();
        let from_json: Sample = parse_json(r#"{"name": "a", "level": 3}"#).unwrap();
        assert_eq!(from_toml, from_json);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            parse_toml::<Sample>("name = "),
            Err(ConfigError::ParseError(_))
        ));
        assert!(matches!(
            parse_json::<Sample>("{"),
            Err(ConfigError::JsonError(_))
        ));
    }

    #[test]
    fn test_unsupported_extension() {
        let result = load_file::<Sample>(Path::new("tables.yaml"));
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(ref ext)) if ext == "yaml"));
    }

    #[test]
    fn test_missing_file() {
        let result = load_file::<Sample>(Path::new("/nonexistent/tables.toml"));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }
}
