//! Game server configuration: typed settings loaded from a Lua config
//! script, with experience stages from an optional TOML file.
//!
//! [`ConfigStore`] owns the settings and serves them by key. Sources
//! are pluggable through [`ConfigSource`], and the store reaches the
//! rest of the server only through [`GameSession`] and the published
//! [`DespawnSettings`].

mod error;
mod keys;
mod session;
mod source;
pub mod stages;
mod store;
mod value;

/// Public error type returned by config loading and key lookups.
pub use error::ConfigError;
/// Enumerated setting keys.
pub use keys::{BooleanKey, ConfigKey, FloatKey, IntegerKey, StringKey};
/// Collaborator interfaces.
pub use session::{DespawnSettings, GameSession, motd_hash};
/// Config sources.
pub use source::{ConfigSource, LuaSource, TomlSource};
pub use stages::{ExperienceStage, ExperienceStages};
/// The settings store and its load options.
pub use store::{
    ConfigStore, ConfigStoreOptions, DEFAULT_CONFIG_FILE, DEFAULT_STAGES_FILE, LoadReport,
    StageOrigin,
};
pub use value::{Environment, SettingValue, boolean_string};

#[inline]
/// Initialize logging using env_logger if the "logging" feature is enabled.
///
/// This is a no-op if the feature is not enabled. Server binaries call
/// this before the first `ConfigStore::load` so load diagnostics show up.
pub fn init_logging() {
    #[cfg(feature = "logging")]
    {
        let _ = env_logger::try_init();
    }
}
