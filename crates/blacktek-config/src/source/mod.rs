//! Pluggable config sources.
//!
//! A source turns one file into an [`Environment`]. The store uses one
//! source for the main script and another for the structured stage
//! file; both can be swapped through `ConfigStoreOptions`.

mod script;
mod structured;


pub use script::LuaSource;
pub use structured::TomlSource;

use crate::{ConfigError, Environment};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Parses a config file into a name/value environment.
pub trait ConfigSource: Send + Sync + fmt::Debug {
    /// Read and evaluate `path`. Any interpreter or parser state must be
    /// released before this returns, on every path.
    fn read(&self, path: &Path) -> Result<Environment, ConfigError>;
}

impl<T: ConfigSource + ?Sized> ConfigSource for Arc<T> {
    fn read(&self, path: &Path) -> Result<Environment, ConfigError> {
        (**self).read(path)
    }
}
