//! Error types for config loading and key lookups.

use thiserror::Error;

/// Errors returned while loading config sources or resolving keys.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading a config file failed.
    #[error("failed to read config: {0}")]
    ReadFailed(#[from] std::io::Error),
    /// Parsing a structured-data file failed.
    #[error("failed to parse config: {0}")]
    ParseFailed(#[from] toml::de::Error),
    /// Executing the config script failed.
    #[error("failed to execute config script: {0}")]
    ScriptFailed(String),
    /// The script interpreter could not be created.
    #[error("failed to initialize script interpreter: {0}")]
    InterpreterInit(String),
    /// A raw index does not name a key of the family.
    #[error("invalid {family} config index {index}")]
    InvalidKey { family: &'static str, index: usize },
    /// A name does not match any key of the family.
    #[error("unknown {family} config key {name:?}")]
    UnknownKey { family: &'static str, name: String },
}

impl ConfigError {
    /// Whether the error leaves the process unable to load config at all.
    ///
    /// Everything else is a per-attempt failure: the caller keeps the
    /// previously loaded values.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ConfigError::InterpreterInit(_))
    }

    /// Whether the error means the file was simply not there.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::ReadFailed(err) if err.kind() == std::io::ErrorKind::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io;

    fn every_variant() -> Vec<ConfigError> {
        vec![
            ConfigError::ReadFailed(io::Error::new(io::ErrorKind::NotFound, "config.lua")),
            ConfigError::ReadFailed(io::Error::new(io::ErrorKind::PermissionDenied, "config.lua")),
            ConfigError::ParseFailed(toml::from_str::<toml::Table>("[[stage]\n").unwrap_err()),
            ConfigError::ScriptFailed("config.lua:1: unexpected symbol".to_string()),
            ConfigError::InterpreterInit("not enough memory".to_string()),
            ConfigError::InvalidKey {
                family: "integer",
                index: 999,
            },
            ConfigError::UnknownKey {
                family: "string",
                name: "NOPE".to_string(),
            },
        ]
    }

    #[test]
    fn only_interpreter_init_is_fatal() {
        let fatal: Vec<bool> = every_variant().iter().map(ConfigError::is_fatal).collect();
        assert_eq!(fatal, vec![false, false, false, false, true, false, false]);
    }

    #[test]
    fn only_missing_files_are_not_found() {
        let not_found: Vec<bool> = every_variant()
            .iter()
            .map(ConfigError::is_not_found)
            .collect();
        assert_eq!(
            not_found,
            vec![true, false, false, false, false, false, false]
        );
    }
}
