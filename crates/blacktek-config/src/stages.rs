//! Experience stages: level ranges with their experience multiplier.

use crate::{Environment, SettingValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Script global holding the fallback stage table.
pub const SCRIPT_STAGES_GLOBAL: &str = "experienceStages";

/// One level range and the multiplier applied inside it (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExperienceStage {
    pub min_level: u32,
    pub max_level: u32,
    pub multiplier: f32,
}

impl ExperienceStage {
    pub fn new(min_level: u32, max_level: u32, multiplier: f32) -> Self {
        Self {
            min_level,
            max_level,
            multiplier,
        }
    }

    pub fn contains(&self, level: u32) -> bool {
        level >= self.min_level && level <= self.max_level
    }

    /// Build a stage from a table entry; missing or unusable fields take
    /// their defaults (`1`, `u32::MAX`, `1.0`).
    fn from_fields(fields: &BTreeMap<String, SettingValue>) -> Self {
        Self {
            min_level: level_field(fields, "minlevel", 1),
            max_level: level_field(fields, "maxlevel", u32::MAX),
            multiplier: fields
                .get("multiplier")
                .and_then(SettingValue::as_f64)
                .map(|value| value as f32)
                .unwrap_or(1.0),
        }
    }
}

fn level_field(fields: &BTreeMap<String, SettingValue>, name: &str, default: u32) -> u32 {
    fields
        .get(name)
        .and_then(SettingValue::as_i64)
        .and_then(|value| u32::try_from(value).ok())
        .unwrap_or(default)
}

/// Stage list kept sorted by ascending `min_level`.
///
/// Ranges may overlap; lookups return the first stage in sorted order
/// that contains the level. Serialized as a plain list; deserializing
/// sorts it again.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<ExperienceStage>", into = "Vec<ExperienceStage>")]
pub struct ExperienceStages {
    stages: Vec<ExperienceStage>,
}

impl ExperienceStages {
    pub fn new(mut stages: Vec<ExperienceStage>) -> Self {
        stages.sort_by(|a, b| {
            a.min_level
                .cmp(&b.min_level)
                .then(a.max_level.cmp(&b.max_level))
                .then(a.multiplier.total_cmp(&b.multiplier))
        });
        stages.shrink_to_fit();
        Self { stages }
    }

    /// Multiplier of the first stage containing `level`.
    pub fn multiplier_for(&self, level: u32) -> Option<f32> {
        self.stages
            .iter()
            .find(|stage| stage.contains(level))
            .map(|stage| stage.multiplier)
    }

    pub fn as_slice(&self) -> &[ExperienceStage] {
        &self.stages
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExperienceStage> {
        self.stages.iter()
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl From<Vec<ExperienceStage>> for ExperienceStages {
    fn from(stages: Vec<ExperienceStage>) -> Self {
        Self::new(stages)
    }
}

impl From<ExperienceStages> for Vec<ExperienceStage> {
    fn from(stages: ExperienceStages) -> Self {
        stages.stages
    }
}

/// Stages from a structured stage document.
///
/// `config.enabled = false` disables the document and yields no stages,
/// which sends the store to the script fallback. Entries of the `stage`
/// array that are not tables are skipped.
pub fn stages_from_structured(env: &Environment) -> ExperienceStages {
    let disabled = env
        .get("config")
        .and_then(SettingValue::as_table)
        .and_then(|config| config.get("enabled"))
        .is_some_and(|enabled| matches!(enabled, SettingValue::Boolean(false)));
    if disabled {
        return ExperienceStages::default();
    }

    match env.get("stage") {
        Some(SettingValue::Array(entries)) => collect(entries.iter()),
        _ => ExperienceStages::default(),
    }
}

/// Stages from the `experienceStages` table defined by the config script.
pub fn stages_from_script(env: &Environment) -> ExperienceStages {
    match env.get(SCRIPT_STAGES_GLOBAL) {
        Some(table) => collect(table.entries().into_iter()),
        None => ExperienceStages::default(),
    }
}

fn collect<'a>(entries: impl Iterator<Item = &'a SettingValue>) -> ExperienceStages {
    ExperienceStages::new(
        entries
            .filter_map(SettingValue::as_table)
            .map(ExperienceStage::from_fields)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TomlSource;
    use pretty_assertions::assert_eq;

    #[test]
    fn structured_stages_are_sorted_with_defaults() {
        let env = TomlSource::parse_str(
            r#"
            [[stage]]
            minlevel = 51
            maxlevel = 100
            multiplier = 3

            [[stage]]
            maxlevel = 50
            multiplier = 2.5
            "#,
        )
        .expect("env");

        let stages = stages_from_structured(&env);
        assert_eq!(
            stages.as_slice(),
            &[
                ExperienceStage::new(1, 50, 2.5),
                ExperienceStage::new(51, 100, 3.0),
            ]
        );
    }

    #[test]
    fn structured_stage_missing_fields_use_defaults() {
        let env = TomlSource::parse_str("[[stage]]\n").expect("env");
        let stages = stages_from_structured(&env);
        assert_eq!(stages.as_slice(), &[ExperienceStage::new(1, u32::MAX, 1.0)]);
    }

    #[test]
    fn structured_disabled_yields_nothing() {
        let env = TomlSource::parse_str(
            "[config]\nenabled = false\n\n[[stage]]\nminlevel = 1\nmultiplier = 4\n",
        )
        .expect("env");
        assert!(stages_from_structured(&env).is_empty());
    }

    #[test]
    fn structured_skips_non_table_entries() {
        let env = TomlSource::parse_str("stage = [1, 2]\n").expect("env");
        assert!(stages_from_structured(&env).is_empty());
    }

    #[test]
    fn invalid_levels_fall_back_to_defaults() {
        let env = TomlSource::parse_str(
            "[[stage]]\nminlevel = -5\nmaxlevel = 99999999999\nmultiplier = \"fast\"\n",
        )
        .expect("env");
        let stages = stages_from_structured(&env);
        assert_eq!(stages.as_slice(), &[ExperienceStage::new(1, u32::MAX, 1.0)]);
    }

    #[test]
    fn script_stages_accept_tables_of_tables() {
        let mut first = BTreeMap::new();
        first.insert("minlevel".to_string(), SettingValue::Integer(20));
        first.insert("multiplier".to_string(), SettingValue::Float(0.5));
        let mut second = BTreeMap::new();
        second.insert("maxlevel".to_string(), SettingValue::Integer(19));
        let env = Environment::new().with(
            SCRIPT_STAGES_GLOBAL,
            SettingValue::Array(vec![
                SettingValue::Table(first),
                SettingValue::Boolean(true),
                SettingValue::Table(second),
            ]),
        );

        let stages = stages_from_script(&env);
        assert_eq!(
            stages.as_slice(),
            &[
                ExperienceStage::new(1, 19, 1.0),
                ExperienceStage::new(20, u32::MAX, 0.5),
            ]
        );
    }

    #[test]
    fn deserialized_stages_are_sorted() {
        let stages: ExperienceStages = serde_json::from_str(
            r#"[
                {"min_level": 51, "max_level": 100, "multiplier": 3.0},
                {"min_level": 1, "max_level": 50, "multiplier": 2.0}
            ]"#,
        )
        .expect("stages");

        assert_eq!(
            stages.as_slice(),
            &[
                ExperienceStage::new(1, 50, 2.0),
                ExperienceStage::new(51, 100, 3.0),
            ]
        );
        assert_eq!(stages.multiplier_for(30), Some(2.0));

        let json = serde_json::to_value(&stages).expect("json");
        assert_eq!(json[0]["min_level"], 1);
    }

    #[test]
    fn overlapping_ranges_resolve_to_first_in_sorted_order() {
        let stages = ExperienceStages::new(vec![
            ExperienceStage::new(10, 20, 5.0),
            ExperienceStage::new(1, 100, 2.0),
            ExperienceStage::new(10, 15, 4.0),
        ]);
        assert_eq!(stages.multiplier_for(12), Some(2.0));
        assert_eq!(stages.multiplier_for(101), None);

        let tied = ExperienceStages::new(vec![
            ExperienceStage::new(10, 20, 5.0),
            ExperienceStage::new(10, 15, 4.0),
        ]);
        assert_eq!(tied.multiplier_for(12), Some(4.0));
        assert_eq!(tied.multiplier_for(18), Some(5.0));
    }
}
