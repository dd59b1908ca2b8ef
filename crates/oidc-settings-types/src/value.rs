//! Scalar setting values and boolean normalization
//!
//! Stored settings arrive in whatever shape the persistence layer kept them:
//! `"1"`, `1`, `true`, `null`. Everything that consumes a flag goes through
//! [`is_truthy`] so the same value never means two things in two places.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single stored setting value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
	#[default]
	Null,
	Bool(bool), // Must be before Int to avoid bool -> int coercion
	Int(i64),
	Text(String),
}

impl SettingValue {
	pub fn is_null(&self) -> bool {
		matches!(self, SettingValue::Null)
	}

	/// Text form used for rendering and comparisons. Null renders as empty.
	pub fn to_text(&self) -> String {
		match self {
			SettingValue::Null | SettingValue::Bool(false) => String::new(),
			SettingValue::Bool(true) => "1".to_string(),
			SettingValue::Int(i) => i.to_string(),
			SettingValue::Text(s) => s.clone(),
		}
	}

	/// Integer form. Text is parsed after trimming; unparsable text yields None.
	pub fn as_int(&self) -> Option<i64> {
		match self {
			SettingValue::Null => None,
			SettingValue::Bool(b) => Some(i64::from(*b)),
			SettingValue::Int(i) => Some(*i),
			SettingValue::Text(s) => s.trim().parse().ok(),
		}
	}

	pub fn is_truthy(&self) -> bool {
		is_truthy(self)
	}

	/// Convert a JSON scalar. Arrays and objects have no scalar form.
	pub fn from_json(value: &serde_json::Value) -> Option<Self> {
		match value {
			serde_json::Value::Null => Some(SettingValue::Null),
			serde_json::Value::Bool(b) => Some(SettingValue::Bool(*b)),
			serde_json::Value::Number(n) => match n.as_i64() {
				Some(i) => Some(SettingValue::Int(i)),
				None => Some(SettingValue::Text(n.to_string())),
			},
			serde_json::Value::String(s) => Some(SettingValue::Text(s.clone())),
			serde_json::Value::Array(_) | serde_json::Value::Object(_) => None,
		}
	}
}

impl fmt::Display for SettingValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_text())
	}
}

impl From<&str> for SettingValue {
	fn from(s: &str) -> Self {
		SettingValue::Text(s.to_string())
	}
}

impl From<String> for SettingValue {
	fn from(s: String) -> Self {
		SettingValue::Text(s)
	}
}

impl From<bool> for SettingValue {
	fn from(b: bool) -> Self {
		SettingValue::Bool(b)
	}
}

impl From<i64> for SettingValue {
	fn from(i: i64) -> Self {
		SettingValue::Int(i)
	}
}

/// Boolean normalization for flag-like values.
///
/// Truthy: `true`, any non-zero integer, any text other than the falsy
/// spellings. Falsy: `null`, `false`, `0`, `""`, `"0"`, `"false"`, `"off"`,
/// `"no"` (text compared trimmed and case-insensitively).
pub fn is_truthy(value: &SettingValue) -> bool {
	match value {
		SettingValue::Null => false,
		SettingValue::Bool(b) => *b,
		SettingValue::Int(i) => *i != 0,
		SettingValue::Text(s) => is_truthy_str(s),
	}
}

/// Boolean normalization for raw text, e.g. environment variables
pub fn is_truthy_str(s: &str) -> bool {
	let s = s.trim();
	!(s.is_empty()
		|| s == "0"
		|| s.eq_ignore_ascii_case("false")
		|| s.eq_ignore_ascii_case("off")
		|| s.eq_ignore_ascii_case("no"))
}


// vim: ts=4
