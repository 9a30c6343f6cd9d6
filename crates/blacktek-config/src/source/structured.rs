//! TOML-backed structured-data source.

use super::ConfigSource;
use crate::{ConfigError, Environment, SettingValue};
use log::debug;
use std::fs;
use std::path::Path;

/// Reads a TOML document; top-level keys become environment names.
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlSource;

impl TomlSource {
    pub fn new() -> Self {
        Self
    }

    /// Parse TOML contents that are already in memory.
    pub fn parse_str(contents: &str) -> Result<Environment, ConfigError> {
        let table: toml::Table = toml::from_str(contents)?;
        Ok(table
            .into_iter()
            .map(|(name, value)| (name, convert(value)))
            .collect())
    }
}

impl ConfigSource for TomlSource {
    fn read(&self, path: &Path) -> Result<Environment, ConfigError> {
        debug!("reading structured config (path={})", path.display());
        let contents = fs::read_to_string(path)?;
        Self::parse_str(&contents)
    }
}

fn convert(value: toml::Value) -> SettingValue {
    match value {
        toml::Value::String(text) => SettingValue::String(text),
        toml::Value::Integer(value) => SettingValue::Integer(value),
        toml::Value::Float(value) => SettingValue::Float(value),
        toml::Value::Boolean(value) => SettingValue::Boolean(value),
        toml::Value::Datetime(value) => SettingValue::String(value.to_string()),
        toml::Value::Array(items) => SettingValue::Array(items.into_iter().map(convert).collect()),
        toml::Value::Table(table) => SettingValue::Table(
            table
                .into_iter()
                .map(|(key, value)| (key, convert(value)))
                .collect(),
        ),
    }
}
