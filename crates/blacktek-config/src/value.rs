//! Source-neutral setting values and the environment they live in.
//!
//! Sources convert whatever they parse into an [`Environment`]; the
//! store only ever reads through the typed lookups here, which apply the
//! same loose coercions a script author expects (numbers print as text,
//! numeric strings count as numbers).

use std::collections::BTreeMap;

/// A single value read from a config source.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Array(Vec<SettingValue>),
    Table(BTreeMap<String, SettingValue>),
}

impl SettingValue {
    /// Text form of strings and numbers.
    pub fn as_text(&self) -> Option<String> {
        match self {
            SettingValue::String(text) => Some(text.clone()),
            SettingValue::Integer(value) => Some(value.to_string()),
            SettingValue::Float(value) => Some(render_float(*value)),
            _ => None,
        }
    }

    /// Numeric form of numbers and numeric strings.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            SettingValue::Integer(value) => Some(*value as f64),
            SettingValue::Float(value) => Some(*value),
            SettingValue::String(text) => parse_number(text),
            _ => None,
        }
    }

    /// Integer form of numbers and numeric strings, truncating fractions.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            SettingValue::Integer(value) => Some(*value),
            other => other.as_f64().map(|value| value.trunc() as i64),
        }
    }

    pub fn as_table(&self) -> Option<&BTreeMap<String, SettingValue>> {
        match self {
            SettingValue::Table(table) => Some(table),
            _ => None,
        }
    }

    /// Entries of an array, or the values of a table in key order.
    pub fn entries(&self) -> Vec<&SettingValue> {
        match self {
            SettingValue::Array(items) => items.iter().collect(),
            SettingValue::Table(table) => table.values().collect(),
            _ => Vec::new(),
        }
    }
}

/// Top-level names and values produced by one config source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    values: BTreeMap<String, SettingValue>,
}

impl Environment {
    /// Empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a top-level name.
    pub fn insert(&mut self, name: impl Into<String>, value: SettingValue) {
        self.values.insert(name.into(), value);
    }

    /// Builder-style insert, mostly for tests and in-memory sources.
    pub fn with(mut self, name: impl Into<String>, value: SettingValue) -> Self {
        self.insert(name, value);
        self
    }

    /// Raw value bound to `name`, if any.
    pub fn get(&self, name: &str) -> Option<&SettingValue> {
        self.values.get(name)
    }

    /// Number of top-level names.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// String lookup; numbers are accepted in their text form.
    pub fn string(&self, name: &str, default: &str) -> String {
        self.get(name)
            .and_then(SettingValue::as_text)
            .unwrap_or_else(|| default.to_string())
    }

    /// Integer lookup; floats truncate toward zero and saturate at the
    /// `i32` bounds.
    pub fn number(&self, name: &str, default: i32) -> i32 {
        match self.get(name) {
            Some(SettingValue::Integer(value)) => {
                (*value).clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
            }
            Some(value) => value
                .as_f64()
                .map(|value| value as i32)
                .unwrap_or(default),
            None => default,
        }
    }

    /// Boolean lookup; strings and numbers go through [`boolean_string`].
    pub fn boolean(&self, name: &str, default: bool) -> bool {
        match self.get(name) {
            Some(SettingValue::Boolean(value)) => *value,
            Some(value) => value
                .as_text()
                .map(|text| boolean_string(&text))
                .unwrap_or(default),
            None => default,
        }
    }

    pub fn float(&self, name: &str, default: f32) -> f32 {
        self.get(name)
            .and_then(SettingValue::as_f64)
            .map(|value| value as f32)
            .unwrap_or(default)
    }
}

impl FromIterator<(String, SettingValue)> for Environment {
    fn from_iter<I: IntoIterator<Item = (String, SettingValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Interpret free text as a flag: empty, or starting with `f`, `n` or
/// `0` (any case) is false, anything else is true.
pub fn boolean_string(text: &str) -> bool {
    match text.chars().next() {
        None => false,
        Some(first) => !matches!(first.to_ascii_lowercase(), 'f' | 'n' | '0'),
    }
}

fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    if let Some(hex) = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
    {
        return i64::from_str_radix(hex, 16).ok().map(|value| value as f64);
    }
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Significant digits scripts use when printing floats.
const FLOAT_DIGITS: i32 = 14;

/// Floats print with 14 significant digits (C `%.14g`); text that would
/// read as an integer gets a trailing `.0`.
fn render_float(value: f64) -> String {
    let text = format_general(value);
    if text.bytes().all(|b| b == b'-' || b.is_ascii_digit()) {
        format!("{text}.0")
    } else {
        text
    }
}

fn format_general(value: f64) -> String {
    if value.is_nan() {
        return if value.is_sign_negative() { "-nan" } else { "nan" }.to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let scientific = format!("{:.*e}", (FLOAT_DIGITS - 1) as usize, value);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= FLOAT_DIGITS {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (FLOAT_DIGITS - 1 - exponent) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
