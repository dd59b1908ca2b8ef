//! Field registry and frozen field schema

use indexmap::IndexMap;
use std::collections::HashSet;

use crate::prelude::*;

/// Extension hook: receives the full ordered field map and returns the map to use.
/// Entries may be added, removed, modified or reordered.
pub type SchemaHook = Box<dyn Fn(FieldMap) -> ClResult<FieldMap> + Send + Sync>;

/// Mutable registry used while the settings page is being set up
pub struct FieldRegistry {
	fields: FieldMap,
	hooks: Vec<(String, SchemaHook)>,
	locked: HashSet<String>,
}

impl FieldRegistry {
	pub fn new() -> Self {
		Self { fields: IndexMap::new(), hooks: Vec::new(), locked: HashSet::new() }
	}

	/// Register a field definition under `key`, after all previously registered ones
	pub fn register(&mut self, key: impl Into<String>, def: FieldDefinition) -> ClResult<()> {
		let key = key.into();
		if self.fields.contains_key(&key) {
			return Err(Error::ConfigError(format!("Field '{}' is already registered", key)));
		}

		debug!("Registering field: {}", key);
		self.fields.insert(key, def);
		Ok(())
	}

	/// Register an extension hook. Hooks run in registration order on freeze.
	pub fn add_hook(&mut self, name: impl Into<String>, hook: SchemaHook) {
		let name = name.into();
		debug!("Registering schema hook: {}", name);
		self.hooks.push((name, hook));
	}

	/// Mark a key as fixed by the deployment. Applied on freeze, after the
	/// hooks, so it also covers hook-added fields and wins over hook edits.
	pub fn lock(&mut self, key: impl Into<String>) {
		self.locked.insert(key.into());
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// Run the hooks, stamp key and name on every field, and validate the result
	pub fn freeze(self, prefix: &str) -> ClResult<FieldSchema> {
		if prefix.is_empty() {
			return Err(Error::ConfigError("Storage prefix must not be empty".into()));
		}

		let mut fields = self.fields;
		for (name, hook) in &self.hooks {
			let before = fields.len();
			fields = hook(fields).map_err(|e| {
				error!("Schema hook '{}' failed: {}", name, e);
				e
			})?;
			debug!("Schema hook '{}' applied: {} -> {} fields", name, before, fields.len());
		}

		for (key, def) in &mut fields {
			validate_key(key)?;
			def.validate().map_err(|e| match e {
				Error::ConfigError(msg) => Error::ConfigError(format!("Field '{}': {}", key, msg)),
				e => e,
			})?;
			def.annotate(prefix, key);
			if self.locked.contains(key) {
				def.disabled = true;
			}
		}

		for key in self.locked.iter().filter(|key| !fields.contains_key(*key)) {
			warn!("Locked setting '{}' is not in the schema", key);
		}

		info!("Freezing field schema with {} fields", fields.len());
		Ok(FieldSchema { prefix: prefix.to_string(), fields })
	}
}

impl Default for FieldRegistry {
	fn default() -> Self {
		Self::new()
	}
}

fn validate_key(key: &str) -> ClResult<()> {
	let valid = !key.is_empty()
		&& key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
	if !valid {
		return Err(Error::ConfigError(format!("Invalid field key '{}'", key)));
	}
	Ok(())
}

/// Immutable, ordered field schema
#[derive(Debug, Clone)]
pub struct FieldSchema {
	prefix: String,
	fields: FieldMap,
}

impl FieldSchema {
	/// Storage prefix the field names are qualified with
	pub fn prefix(&self) -> &str {
		&self.prefix
	}

	pub fn get(&self, key: &str) -> Option<&FieldDefinition> {
		self.fields.get(key)
	}

	pub fn contains(&self, key: &str) -> bool {
		self.fields.contains_key(key)
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.fields.keys().map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = &FieldDefinition> {
		self.fields.values()
	}

	/// Fields of one section, in schema order
	pub fn in_section(&self, section: Section) -> impl Iterator<Item = &FieldDefinition> {
		self.fields.values().filter(move |def| def.section == section)
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// Typed getter validated against the schema key set
	pub fn read<'a>(&self, record: &'a SettingsRecord, key: &str) -> ClResult<&'a SettingValue> {
		if !self.contains(key) {
			return Err(Error::ValidationError(format!("Unknown setting: {}", key)));
		}
		Ok(record.value(key))
	}

	/// Typed setter validated against the schema key set
	pub fn write(
		&self,
		record: &mut SettingsRecord,
		key: &str,
		value: impl Into<SettingValue>,
	) -> ClResult<()> {
		if !self.contains(key) {
			warn!("Refusing to store unknown setting '{}'", key);
			return Err(Error::ValidationError(format!("Unknown setting: {}", key)));
		}
		record.insert(key, value);
		Ok(())
	}

	/// Copy of `record` where every schema key exists: missing keys get the
	/// field default, or null when the field has none
	pub fn with_defaults(&self, record: &SettingsRecord) -> SettingsRecord {
		let mut record = record.clone();
		for def in self.fields.values() {
			record.ensure(def.key(), || def.default.clone().unwrap_or_default());
		}
		record
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn field(title: &str, typ: FieldType) -> FieldDefinition {
		FieldDefinition::builder()
			.title(title)
			.field_type(typ)
			.section(Section::ClientSettings)
			.build()
			.unwrap()
	}

	fn registry() -> FieldRegistry {
		let mut registry = FieldRegistry::new();
		registry.register("client_id", field("Client ID", FieldType::Text)).unwrap();
		registry.register("no_sslverify", field("Disable SSL Verify", FieldType::Checkbox)).unwrap();
		registry
	}

	#[test]
	fn test_duplicate_registration_fails() {
		let mut registry = registry();
		let result = registry.register("client_id", field("Again", FieldType::Text));
		assert!(matches!(result, Err(Error::ConfigError(_))));
	}

	#[test]
	fn test_freeze_annotates_in_order() {
		let schema = registry().freeze("oidc").unwrap();
		assert_eq!(schema.keys().collect::<Vec<_>>(), vec!["client_id", "no_sslverify"]);
		let def = schema.get("no_sslverify").unwrap();
		assert_eq!(def.key(), "no_sslverify");
		assert_eq!(def.name(), "oidc[no_sslverify]");
	}

	#[test]
	fn test_hooks_run_in_order() {
		let mut registry = registry();
		registry.add_hook(
			"add",
			Box::new(|mut fields: FieldMap| -> ClResult<FieldMap> {
				fields.insert("extra".into(), field("Extra", FieldType::Number));
				Ok(fields)
			}),
		);
		registry.add_hook(
			"remove",
			Box::new(|mut fields: FieldMap| -> ClResult<FieldMap> {
				fields.shift_remove("client_id");
				Ok(fields)
			}),
		);
		let schema = registry.freeze("oidc").unwrap();
		assert_eq!(schema.keys().collect::<Vec<_>>(), vec!["no_sslverify", "extra"]);
		assert_eq!(schema.get("extra").unwrap().name(), "oidc[extra]");
	}

	#[test]
	fn test_hook_output_is_validated() {
		let mut registry = registry();
		registry.add_hook(
			"break-select",
			Box::new(|mut fields: FieldMap| -> ClResult<FieldMap> {
				if let Some(def) = fields.get_mut("client_id") {
					def.field_type = FieldType::Select;
				}
				Ok(fields)
			}),
		);
		let result = registry.freeze("oidc");
		assert!(matches!(result, Err(Error::ConfigError(msg)) if msg.contains("client_id")));
	}

	#[test]
	fn test_hook_error_propagates() {
		let mut registry = registry();
		registry.add_hook(
			"fails",
			Box::new(|_: FieldMap| -> ClResult<FieldMap> {
				Err(Error::ConfigError("hook rejected the schema".into()))
			}),
		);
		assert!(registry.freeze("oidc").is_err());
	}

	#[test]
	fn test_invalid_key_rejected() {
		let mut registry = registry();
		registry.register("bad key", field("Bad", FieldType::Text)).unwrap();
		assert!(registry.freeze("oidc").is_err());
	}

	#[test]
	fn test_lock_applies_after_hooks() {
		let mut registry = registry();
		registry.lock("extra");
		registry.lock("client_id");
		registry.add_hook(
			"add-and-unlock",
			Box::new(|mut fields: FieldMap| -> ClResult<FieldMap> {
				fields.insert("extra".into(), field("Extra", FieldType::Text));
				if let Some(def) = fields.get_mut("client_id") {
					def.disabled = false;
				}
				Ok(fields)
			}),
		);
		let schema = registry.freeze("oidc").unwrap();
		assert!(schema.get("extra").unwrap().disabled);
		assert!(schema.get("client_id").unwrap().disabled);
		assert!(!schema.get("no_sslverify").unwrap().disabled);
	}

	#[test]
	fn test_typed_accessors() {
		let schema = registry().freeze("oidc").unwrap();
		let mut record = SettingsRecord::new();
		schema.write(&mut record, "client_id", "abc").unwrap();
		assert!(schema.write(&mut record, "evil_key", "x").is_err());
		assert_eq!(schema.read(&record, "client_id").unwrap().to_text(), "abc");
		assert!(schema.read(&record, "evil_key").is_err());
		assert!(schema.read(&record, "no_sslverify").unwrap().is_null());
	}

	#[test]
	fn test_with_defaults_fills_missing() {
		let mut registry = FieldRegistry::new();
		let with_default = FieldDefinition::builder()
			.title("Log Limit")
			.field_type(FieldType::Number)
			.section(Section::LogSettings)
			.default(SettingValue::Int(1000))
			.build()
			.unwrap();
		registry.register("log_limit", with_default).unwrap();
		registry.register("client_id", field("Client ID", FieldType::Text)).unwrap();
		let schema = registry.freeze("oidc").unwrap();

		let record = schema.with_defaults(&SettingsRecord::new());
		assert_eq!(record.int("log_limit"), Some(1000));
		assert_eq!(record.get("client_id"), Some(&SettingValue::Null));
	}
}

// vim: ts=4
