//! Store behavior with injected in-memory sources.

use blacktek_config::{
    ConfigStore, ConfigStoreOptions, Environment, IntegerKey, SettingValue, StageOrigin, StringKey,
};
use blacktek_test_utils::StaticSource;
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

fn stage(min: i64, max: i64, multiplier: f64) -> SettingValue {
    let mut fields = BTreeMap::new();
    fields.insert("minlevel".to_string(), SettingValue::Integer(min));
    fields.insert("maxlevel".to_string(), SettingValue::Integer(max));
    fields.insert("multiplier".to_string(), SettingValue::Float(multiplier));
    SettingValue::Table(fields)
}

#[test]
fn store_reads_configured_paths_through_sources() {
    let script = Arc::new(StaticSource::new(
        Environment::new().with("serverName", SettingValue::String("Injected".to_string())),
    ));
    let stages = Arc::new(StaticSource::missing());
    let mut store = ConfigStore::with_options(
        ConfigStoreOptions::new()
            .with_config_path("data/world.lua")
            .with_stages_path("data/stages.toml")
            .with_script_source(script.clone())
            .with_stage_source(stages.clone()),
    );

    store.load().expect("load");

    assert_eq!(store.string(StringKey::ServerName), "Injected");
    assert_eq!(script.reads(), vec![PathBuf::from("data/world.lua")]);
    assert_eq!(stages.reads(), vec![PathBuf::from("data/stages.toml")]);
}

#[test]
fn script_path_slot_redirects_next_load() {
    let script = Arc::new(StaticSource::new(Environment::new()));
    let mut store = ConfigStore::with_options(
        ConfigStoreOptions::new()
            .with_script_source(script.clone())
            .with_stage_source(StaticSource::missing()),
    );

    store.load().expect("load");
    store.set_string(StringKey::ConfigFile, "alt.lua");
    store.load().expect("load");

    assert_eq!(
        script.reads(),
        vec![PathBuf::from("config.lua"), PathBuf::from("alt.lua")]
    );
}

#[test]
fn structured_stages_beat_script_stages() {
    let script = StaticSource::new(
        Environment::new()
            .with("experienceStages", SettingValue::Array(vec![stage(1, 100, 2.0)])),
    );
    let stages = StaticSource::new(
        Environment::new().with("stage", SettingValue::Array(vec![stage(1, 100, 6.0)])),
    );
    let mut store = ConfigStore::with_options(
        ConfigStoreOptions::new()
            .with_script_source(script)
            .with_stage_source(stages),
    );

    let report = store.load().expect("load");

    assert_eq!(report.stage_origin, StageOrigin::Structured);
    assert_eq!(store.experience_stage(50), 6.0);
}

#[test]
fn stage_source_failure_falls_back_to_script() {
    let script = StaticSource::new(
        Environment::new()
            .with("experienceStages", SettingValue::Array(vec![stage(1, 100, 2.0)])),
    );
    let mut store = ConfigStore::with_options(
        ConfigStoreOptions::new()
            .with_script_source(script)
            .with_stage_source(StaticSource::failing("unreadable")),
    );

    let report = store.load().expect("load");

    assert_eq!(report.stage_origin, StageOrigin::Script);
    assert_eq!(store.experience_stage(50), 2.0);
}

#[test]
fn script_failure_is_not_fatal_and_keeps_values() {
    let script = Arc::new(StaticSource::new(
        Environment::new().with("rateExp", SettingValue::Integer(12)),
    ));
    let mut store = ConfigStore::with_options(
        ConfigStoreOptions::new()
            .with_script_source(script.clone())
            .with_stage_source(StaticSource::missing()),
    );
    store.load().expect("load");

    script.fail("syntax error near '='");
    let err = store.load().unwrap_err();

    assert!(!err.is_fatal());
    assert_eq!(store.number(IntegerKey::RateExperience), 12);
    assert!(store.is_loaded());
}

#[test]
fn changed_script_only_updates_every_load_settings() {
    let script = Arc::new(StaticSource::new(
        Environment::new()
            .with("mysqlHost", SettingValue::String("db-a".to_string()))
            .with("rateExp", SettingValue::Integer(3)),
    ));
    let mut store = ConfigStore::with_options(
        ConfigStoreOptions::new()
            .with_script_source(script.clone())
            .with_stage_source(StaticSource::missing()),
    );
    assert!(store.load().expect("first load").first_load);

    script.set(
        Environment::new()
            .with("mysqlHost", SettingValue::String("db-b".to_string()))
            .with("rateExp", SettingValue::Integer(9)),
    );
    let report = store.load().expect("second load");

    assert!(!report.first_load);
    assert_eq!(store.string(StringKey::MysqlHost), "db-a");
    assert_eq!(store.number(IntegerKey::RateExperience), 9);
}
