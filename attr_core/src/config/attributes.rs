//! Derivation option files

use super::ConfigError;
use crate::attributes::AttributeConfig;
use std::path::Path;

/// Load derivation options from a TOML or JSON file
pub fn load_attribute_config(path: &Path) -> Result<AttributeConfig, ConfigError> {
    let config: AttributeConfig = super::load_file(path)?;
    validate(config)
}

/// Load derivation options from a TOML string
pub fn parse_attribute_config(content: &str) -> Result<AttributeConfig, ConfigError> {
    validate(super::parse_toml(content)?)
}

fn validate(config: AttributeConfig) -> Result<AttributeConfig, ConfigError> {
    if let Some(stats) = &config.stats {
        if let Some(bad) = stats.iter().find(|w| !w.percent.is_finite() || w.percent < 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "stat {:?} has invalid percent {}",
                bad.kind, bad.percent
            )));
        }
    }
    Ok(config)
}
