//! Canonical settings record
//!
//! The record is the single persisted key -> value blob. It is replaced as a
//! whole on every save; nothing in the engine updates it piecemeal.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::value::{SettingValue, is_truthy};

/// Raw submitted input, as forwarded by the host on save
pub type RawInput = serde_json::Map<String, serde_json::Value>;

static NULL_VALUE: SettingValue = SettingValue::Null;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingsRecord {
	values: IndexMap<String, SettingValue>,
}

impl SettingsRecord {
	pub fn new() -> Self {
		Self::default()
	}

	/// Build a record from a stored JSON object. Non-scalar entries are dropped.
	pub fn from_json_object(object: &serde_json::Map<String, serde_json::Value>) -> Self {
		let mut values = IndexMap::with_capacity(object.len());
		for (key, value) in object {
			match SettingValue::from_json(value) {
				Some(v) => {
					values.insert(key.clone(), v);
				}
				None => tracing::warn!("Dropping non-scalar stored setting '{}'", key),
			}
		}
		Self { values }
	}

	pub fn get(&self, key: &str) -> Option<&SettingValue> {
		self.values.get(key)
	}

	/// Value for a key; missing keys read as null
	pub fn value(&self, key: &str) -> &SettingValue {
		self.values.get(key).unwrap_or(&NULL_VALUE)
	}

	/// Text value for a key; missing and null read as empty string
	pub fn text(&self, key: &str) -> String {
		self.value(key).to_text()
	}

	/// Normalized boolean value for a key
	pub fn flag(&self, key: &str) -> bool {
		is_truthy(self.value(key))
	}

	pub fn int(&self, key: &str) -> Option<i64> {
		self.value(key).as_int()
	}

	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<SettingValue>) {
		self.values.insert(key.into(), value.into());
	}

	/// Make sure a key exists, inserting `default` when it does not
	pub fn ensure(&mut self, key: &str, default: impl FnOnce() -> SettingValue) {
		if !self.values.contains_key(key) {
			self.values.insert(key.to_string(), default());
		}
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.values.contains_key(key)
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.values.keys().map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &SettingValue)> {
		self.values.iter().map(|(k, v)| (k.as_str(), v))
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Raw input form of this record, as if it had been submitted again
	pub fn to_raw_input(&self) -> RawInput {
		self.values
			.iter()
			.map(|(k, v)| {
				let json = match v {
					SettingValue::Null => serde_json::Value::Null,
					SettingValue::Bool(b) => serde_json::Value::Bool(*b),
					SettingValue::Int(i) => serde_json::Value::from(*i),
					SettingValue::Text(s) => serde_json::Value::String(s.clone()),
				};
				(k.clone(), json)
			})
			.collect()
	}
}

impl FromIterator<(String, SettingValue)> for SettingsRecord {
	fn from_iter<I: IntoIterator<Item = (String, SettingValue)>>(iter: I) -> Self {
		Self { values: iter.into_iter().collect() }
	}
}


// vim: ts=4
