//! Balance table overlays

use super::ConfigError;
use crate::tables::AttributeTables;
use std::path::Path;

/// Load a table overlay file and apply it on top of the default tables
///
/// The format follows the extension (`.toml` or `.json`). Every table in the
/// file is optional.
pub fn load_tables(path: &Path) -> Result<AttributeTables, ConfigError> {
    let overlay: AttributeTables = super::load_file(path)?;
    log::info!("loaded table overlay from {}", path.display());
    build(overlay)
}

/// Apply a TOML table overlay on top of the default tables
pub fn parse_tables_toml(content: &str) -> Result<AttributeTables, ConfigError> {
    build(super::parse_toml(content)?)
}

/// Apply a JSON table overlay on top of the default tables
pub fn parse_tables_json(content: &str) -> Result<AttributeTables, ConfigError> {
    build(super::parse_json(content)?)
}

fn build(overlay: AttributeTables) -> Result<AttributeTables, ConfigError> {
    let mut tables = AttributeTables::with_defaults();
    tables.overlay(overlay);

    let issues = tables.validate();
    if !issues.is_empty() {
        return Err(ConfigError::ValidationError(issues.join("; ")));
    }
    Ok(tables)
}
