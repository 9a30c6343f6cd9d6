//! The config store: typed setting slots loaded from a Lua script and an
//! optional TOML stage file.
//!
//! A store starts with zero-valued slots (apart from the script path),
//! is filled by [`ConfigStore::load`], and is refreshed by
//! [`ConfigStore::reload`]. It does no locking; callers serialize loads
//! against reads.

mod bindings;
mod slots;


use crate::stages::{self, ExperienceStages};
use crate::{
    BooleanKey, ConfigError, ConfigKey, ConfigSource, DespawnSettings, Environment, FloatKey,
    GameSession, IntegerKey, LuaSource, StringKey, TomlSource, motd_hash,
};
use bindings::Binding;
use log::{debug, error, info};
use serde::{Deserialize, Serialize};
use slots::Slots;
use std::path::{Path, PathBuf};

/// Default config script path, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "config.lua";
/// Default structured stage file path, relative to the working directory.
pub const DEFAULT_STAGES_FILE: &str = "config/stages.toml";

/// Options controlling where and how a store reads its config.
#[derive(Debug)]
pub struct ConfigStoreOptions {
    /// Script path stored in the `CONFIG_FILE` slot.
    pub config_path: PathBuf,
    /// Structured stage file path.
    pub stages_path: PathBuf,
    /// Source evaluating the config script.
    pub script_source: Box<dyn ConfigSource>,
    /// Source parsing the stage file.
    pub stage_source: Box<dyn ConfigSource>,
}

impl ConfigStoreOptions {
    /// Default paths with the Lua and TOML sources.
    pub fn new() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_FILE),
            stages_path: PathBuf::from(DEFAULT_STAGES_FILE),
            script_source: Box::new(LuaSource::new()),
            stage_source: Box::new(TomlSource::new()),
        }
    }

    /// Script path to evaluate on each load.
    pub fn with_config_path(mut self, path: impl AsRef<Path>) -> Self {
        self.config_path = path.as_ref().to_path_buf();
        self
    }

    /// Structured stage file path.
    pub fn with_stages_path(mut self, path: impl AsRef<Path>) -> Self {
        self.stages_path = path.as_ref().to_path_buf();
        self
    }

    /// Replaces the Lua source, e.g. with an in-memory one.
    pub fn with_script_source(mut self, source: impl ConfigSource + 'static) -> Self {
        self.script_source = Box::new(source);
        self
    }

    /// Replaces the TOML stage source.
    pub fn with_stage_source(mut self, source: impl ConfigSource + 'static) -> Self {
        self.stage_source = Box::new(source);
        self
    }
}

impl Default for ConfigStoreOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Where the experience stages of a load came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageOrigin {
    /// The structured stage file.
    Structured,
    /// The `experienceStages` table of the config script.
    Script,
    /// Neither source defined stages; lookups use the experience rate.
    None,
}

/// Snapshot published by a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadReport {
    /// Whether this load applied the first-load-only settings.
    pub first_load: bool,
    /// Source the experience stages were taken from.
    pub stage_origin: StageOrigin,
    /// Number of stages now in effect.
    pub stage_count: usize,
    /// Despawn values for the monster registry to pull.
    pub despawn: DespawnSettings,
}

/// Typed settings for the game server.
#[derive(Debug)]
pub struct ConfigStore {
    strings: Slots<StringKey, String>,
    integers: Slots<IntegerKey, i32>,
    booleans: Slots<BooleanKey, bool>,
    floats: Slots<FloatKey, f32>,
    stages: ExperienceStages,
    loaded: bool,
    stages_path: PathBuf,
    script_source: Box<dyn ConfigSource>,
    stage_source: Box<dyn ConfigSource>,
}

impl ConfigStore {
    /// Store reading `config.lua` and `config/stages.toml`.
    pub fn new() -> Self {
        Self::with_options(ConfigStoreOptions::new())
    }

    /// Store built from explicit paths and sources; nothing is read yet.
    pub fn with_options(options: ConfigStoreOptions) -> Self {
        let mut strings = Slots::new();
        *strings.slot_mut(StringKey::ConfigFile) = options.config_path.display().to_string();
        Self {
            strings,
            integers: Slots::new(),
            booleans: Slots::new(),
            floats: Slots::new(),
            stages: ExperienceStages::default(),
            loaded: false,
            stages_path: options.stages_path,
            script_source: options.script_source,
            stage_source: options.stage_source,
        }
    }

    /// Evaluate the config script and refresh the settings.
    ///
    /// On error nothing in the store changes. Settings marked first-load
    /// (database, bind address, map, most ports) are only taken from the
    /// first successful load; later loads keep them.
    pub fn load(&mut self) -> Result<LoadReport, ConfigError> {
        let path = PathBuf::from(self.string(StringKey::ConfigFile));
        info!("loading config (path={})", path.display());
        let env = match self.script_source.read(&path) {
            Ok(env) => env,
            Err(err) => {
                error!("failed to load config (path={}): {err}", path.display());
                return Err(err);
            }
        };

        let first_load = !self.loaded;
        self.apply(&env, first_load);

        let (stages, stage_origin) = self.resolve_stages(&env);
        self.stages = stages;
        self.loaded = true;

        let report = LoadReport {
            first_load,
            stage_origin,
            stage_count: self.stages.len(),
            despawn: self.despawn_settings(),
        };
        info!(
            "config loaded (first_load={}, stages={}, stage_origin={:?})",
            report.first_load, report.stage_count, report.stage_origin
        );
        Ok(report)
    }

    /// Load again and tell the game session when the message of the day
    /// changed from what its clients last saw.
    pub fn reload(&mut self, session: &dyn GameSession) -> Result<LoadReport, ConfigError> {
        let result = self.load();
        let current = motd_hash(self.string(StringKey::Motd));
        if current != session.motd_hash() {
            info!("message of the day changed; bumping revision");
            session.increment_motd_num();
        }
        result
    }

    /// Whether a load has succeeded at least once.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Current value of a string setting.
    pub fn string(&self, key: StringKey) -> &str {
        self.string_at(key.index())
    }

    /// Read by raw index; out-of-range indices log and return `""`.
    pub fn string_at(&self, index: usize) -> &str {
        self.strings
            .read(index, "ConfigStore::string")
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Current value of an integer setting.
    pub fn number(&self, key: IntegerKey) -> i32 {
        self.number_at(key.index())
    }

    /// Read by raw index; out-of-range indices log and return `0`.
    pub fn number_at(&self, index: usize) -> i32 {
        self.integers
            .read(index, "ConfigStore::number")
            .copied()
            .unwrap_or(0)
    }

    /// Current value of a boolean setting.
    pub fn boolean(&self, key: BooleanKey) -> bool {
        self.boolean_at(key.index())
    }

    /// Read by raw index; out-of-range indices log and return `false`.
    pub fn boolean_at(&self, index: usize) -> bool {
        self.booleans
            .read(index, "ConfigStore::boolean")
            .copied()
            .unwrap_or(false)
    }

    /// Current value of a float setting.
    pub fn float(&self, key: FloatKey) -> f32 {
        self.float_at(key.index())
    }

    /// Read by raw index; out-of-range indices log and return `0.0`.
    pub fn float_at(&self, index: usize) -> f32 {
        self.floats
            .read(index, "ConfigStore::float")
            .copied()
            .unwrap_or(0.0)
    }

    /// Overwrites a string setting until the next load.
    pub fn set_string(&mut self, key: StringKey, value: impl Into<String>) {
        *self.strings.slot_mut(key) = value.into();
    }

    /// Write by raw index; out-of-range indices log and change nothing.
    pub fn set_string_at(
        &mut self,
        index: usize,
        value: impl Into<String>,
    ) -> Result<(), ConfigError> {
        checked_write::<StringKey>(
            self.strings
                .write(index, value.into(), "ConfigStore::set_string"),
            index,
        )
    }

    /// Overwrites an integer setting until the next load.
    pub fn set_number(&mut self, key: IntegerKey, value: i32) {
        *self.integers.slot_mut(key) = value;
    }

    /// Write by raw index; out-of-range indices log and change nothing.
    pub fn set_number_at(&mut self, index: usize, value: i32) -> Result<(), ConfigError> {
        checked_write::<IntegerKey>(
            self.integers.write(index, value, "ConfigStore::set_number"),
            index,
        )
    }

    /// Overwrites a boolean setting until the next load.
    pub fn set_boolean(&mut self, key: BooleanKey, value: bool) {
        *self.booleans.slot_mut(key) = value;
    }

    /// Write by raw index; out-of-range indices log and change nothing.
    pub fn set_boolean_at(&mut self, index: usize, value: bool) -> Result<(), ConfigError> {
        checked_write::<BooleanKey>(
            self.booleans.write(index, value, "ConfigStore::set_boolean"),
            index,
        )
    }

    /// Overwrites a float setting until the next load.
    pub fn set_float(&mut self, key: FloatKey, value: f32) {
        *self.floats.slot_mut(key) = value;
    }

    /// Write by raw index; out-of-range indices log and change nothing.
    pub fn set_float_at(&mut self, index: usize, value: f32) -> Result<(), ConfigError> {
        checked_write::<FloatKey>(
            self.floats.write(index, value, "ConfigStore::set_float"),
            index,
        )
    }

    /// Experience multiplier for `level`.
    ///
    /// The first stage (ascending `min_level`) containing the level wins;
    /// with no matching stage the `RATE_EXPERIENCE` setting is used.
    pub fn experience_stage(&self, level: u32) -> f32 {
        self.stages
            .multiplier_for(level)
            .unwrap_or_else(|| self.number(IntegerKey::RateExperience) as f32)
    }

    pub fn experience_stages(&self) -> &ExperienceStages {
        &self.stages
    }

    /// Current despawn limits for the monster registry.
    pub fn despawn_settings(&self) -> DespawnSettings {
        DespawnSettings {
            range: self.number(IntegerKey::DefaultDespawnRange),
            radius: self.number(IntegerKey::DefaultDespawnRadius),
        }
    }

    fn apply(&mut self, env: &Environment, first_load: bool) {
        apply_bindings(&mut self.strings, bindings::STRINGS, first_load, |name, default| {
            env.string(name, default)
        });
        apply_bindings(&mut self.integers, bindings::INTEGERS, first_load, |name, default| {
            env.number(name, *default)
        });
        apply_bindings(&mut self.booleans, bindings::BOOLEANS, first_load, |name, default| {
            env.boolean(name, *default)
        });
        apply_bindings(&mut self.floats, bindings::FLOATS, first_load, |name, default| {
            env.float(name, *default)
        });
    }

    /// The stage file wins when it yields stages; otherwise the script's
    /// table is used. Stage file problems never fail the load.
    fn resolve_stages(&self, env: &Environment) -> (ExperienceStages, StageOrigin) {
        let structured = match self.stage_source.read(&self.stages_path) {
            Ok(stage_env) => stages::stages_from_structured(&stage_env),
            Err(err) if err.is_not_found() => {
                debug!(
                    "stage file missing (path={}); using script stages",
                    self.stages_path.display()
                );
                ExperienceStages::default()
            }
            Err(err) => {
                error!(
                    "failed to read stage file (path={}): {err}",
                    self.stages_path.display()
                );
                ExperienceStages::default()
            }
        };
        if !structured.is_empty() {
            return (structured, StageOrigin::Structured);
        }

        let scripted = stages::stages_from_script(env);
        if scripted.is_empty() {
            (scripted, StageOrigin::None)
        } else {
            (scripted, StageOrigin::Script)
        }
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_bindings<K, T, D>(
    slots: &mut Slots<K, T>,
    table: &[Binding<K, D>],
    first_load: bool,
    lookup: impl Fn(&'static str, &D) -> T,
) where
    K: ConfigKey,
    T: Clone + Default + PartialEq,
{
    for binding in table {
        let slot = slots.slot_mut(binding.key);
        let unset = *slot == T::default();
        if binding.policy.applies(first_load, unset) {
            *slot = lookup(binding.global, &binding.default);
        }
    }
}

fn checked_write<K: ConfigKey>(written: bool, index: usize) -> Result<(), ConfigError> {
    if written {
        Ok(())
    } else {
        Err(ConfigError::InvalidKey {
            family: K::FAMILY,
            index,
        })
    }
}
