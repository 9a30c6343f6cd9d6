//! Lua-backed config script source.

use super::ConfigSource;
use crate::{ConfigError, Environment, SettingValue};
use log::debug;
use mlua::{Lua, LuaOptions, StdLib, Table, Value};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

/// Nested tables deeper than this are dropped instead of converted.
const MAX_TABLE_DEPTH: usize = 8;

/// Executes a Lua config script in a fresh interpreter and snapshots
/// the globals it defines.
///
/// Globals that already existed before the script ran (the standard
/// library) are not part of the environment, and neither are values
/// with no data form (functions, userdata, threads).
#[derive(Debug, Clone, Copy, Default)]
pub struct LuaSource;

impl LuaSource {
    pub fn new() -> Self {
        Self
    }

    /// Execute a script held in memory. `name` only labels error messages.
    pub fn eval_str(&self, name: &str, script: &str) -> Result<Environment, ConfigError> {
        evaluate(name, script.as_bytes())
    }
}

impl ConfigSource for LuaSource {
    fn read(&self, path: &Path) -> Result<Environment, ConfigError> {
        debug!("reading config script (path={})", path.display());
        let chunk = fs::read(path)?;
        evaluate(&path.display().to_string(), &chunk)
    }
}

/// The interpreter lives only for the duration of this call.
fn evaluate(name: &str, chunk: &[u8]) -> Result<Environment, ConfigError> {
    let lua = Lua::new_with(StdLib::ALL_SAFE, LuaOptions::default())
        .map_err(|err| ConfigError::InterpreterInit(err.to_string()))?;
    let builtin = global_names(&lua)?;

    lua.load(chunk)
        .set_name(format!("@{name}"))
        .exec()
        .map_err(script_error)?;

    let globals = lua.globals();
    let mut env = Environment::new();
    for pair in globals.pairs::<Value, Value>() {
        let (key, value) = pair.map_err(script_error)?;
        let Some(name) = key_name(&key) else {
            continue;
        };
        if builtin.contains(&name) {
            continue;
        }
        if let Some(value) = convert(&value, 0) {
            env.insert(name, value);
        }
    }
    debug!("config script evaluated (globals={})", env.len());
    Ok(env)
}

fn global_names(lua: &Lua) -> Result<HashSet<String>, ConfigError> {
    let globals = lua.globals();
    let mut names = HashSet::new();
    for pair in globals.pairs::<Value, Value>() {
        let (key, _) = pair.map_err(|err| ConfigError::InterpreterInit(err.to_string()))?;
        if let Some(name) = key_name(&key) {
            names.insert(name);
        }
    }
    Ok(names)
}

fn script_error(err: mlua::Error) -> ConfigError {
    ConfigError::ScriptFailed(err.to_string())
}

fn key_name(key: &Value) -> Option<String> {
    match key {
        Value::String(text) => Some(text.to_string_lossy()),
        Value::Integer(value) => Some(value.to_string()),
        Value::Number(value) => Some(value.to_string()),
        _ => None,
    }
}

fn convert(value: &Value, depth: usize) -> Option<SettingValue> {
    match value {
        Value::Boolean(value) => Some(SettingValue::Boolean(*value)),
        Value::Integer(value) => Some(SettingValue::Integer(*value)),
        Value::Number(value) => Some(SettingValue::Float(*value)),
        Value::String(text) => Some(SettingValue::String(text.to_string_lossy())),
        Value::Table(table) => convert_table(table, depth + 1),
        _ => None,
    }
}

enum EntryKey {
    Index(i64),
    Name(String),
}

/// A table whose keys are exactly `1..=n` becomes an array; any other
/// table becomes a map with stringified keys.
fn convert_table(table: &Table, depth: usize) -> Option<SettingValue> {
    if depth > MAX_TABLE_DEPTH {
        return None;
    }

    let mut entries = Vec::new();
    for pair in table.clone().pairs::<Value, Value>() {
        let Ok((key, value)) = pair else {
            continue;
        };
        let Some(value) = convert(&value, depth) else {
            continue;
        };
        let key = match key {
            Value::Integer(index) => EntryKey::Index(index),
            other => match key_name(&other) {
                Some(name) => EntryKey::Name(name),
                None => continue,
            },
        };
        entries.push((key, value));
    }

    let len = entries.len();
    let is_sequence = len > 0
        && entries.iter().all(|(key, _)| {
            matches!(key, EntryKey::Index(index) if *index >= 1 && *index as usize <= len)
        });

    if is_sequence {
        entries.sort_by_key(|(key, _)| match key {
            EntryKey::Index(index) => *index,
            EntryKey::Name(_) => i64::MAX,
        });
        return Some(SettingValue::Array(
            entries.into_iter().map(|(_, value)| value).collect(),
        ));
    }

    let map: BTreeMap<String, SettingValue> = entries
        .into_iter()
        .map(|(key, value)| {
            let name = match key {
                EntryKey::Index(index) => index.to_string(),
                EntryKey::Name(name) => name,
            };
            (name, value)
        })
        .collect();
    Some(SettingValue::Table(map))
}
