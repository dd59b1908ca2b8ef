//! Field definition model
//!
//! A field definition is the single declarative description of one setting.
//! The same definition drives host registration, rendering and sanitization.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use std::fmt;

use crate::prelude::*;
use crate::value::SettingValue;

/// Ordered field definitions keyed by field key, as seen by extension hooks
pub type FieldMap = IndexMap<String, FieldDefinition>;

/// Declared type of a field; governs renderer dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
	Text,
	Checkbox,
	Select,
	Number,
	/// Any other HTML input type (`password`, `url`, ...), rendered as a text input
	Input(String),
}

impl FieldType {
	pub fn as_str(&self) -> &str {
		match self {
			FieldType::Text => "text",
			FieldType::Checkbox => "checkbox",
			FieldType::Select => "select",
			FieldType::Number => "number",
			FieldType::Input(typ) => typ,
		}
	}
}

impl From<&str> for FieldType {
	fn from(s: &str) -> Self {
		match s {
			"text" => FieldType::Text,
			"checkbox" => FieldType::Checkbox,
			"select" => FieldType::Select,
			"number" => FieldType::Number,
			other => FieldType::Input(other.to_string()),
		}
	}
}

impl fmt::Display for FieldType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl Serialize for FieldType {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self.as_str())
	}
}

/// UI group a field is shown in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
	ClientSettings,
	UserSettings,
	AuthorizationSettings,
	LogSettings,
}

impl Section {
	/// All sections, in page order
	pub const ALL: [Section; 4] = [
		Section::ClientSettings,
		Section::UserSettings,
		Section::AuthorizationSettings,
		Section::LogSettings,
	];

	pub fn id(self) -> &'static str {
		match self {
			Section::ClientSettings => "client_settings",
			Section::UserSettings => "user_settings",
			Section::AuthorizationSettings => "authorization_settings",
			Section::LogSettings => "log_settings",
		}
	}

	/// Untranslated section title
	pub fn title(self) -> &'static str {
		match self {
			Section::ClientSettings => "Client Settings",
			Section::UserSettings => "WordPress User Settings",
			Section::AuthorizationSettings => "Authorization Settings",
			Section::LogSettings => "Log Settings",
		}
	}

	/// Untranslated section description
	pub fn description(self) -> &'static str {
		match self {
			Section::ClientSettings => "Enter your OpenID Connect identity provider settings.",
			Section::UserSettings => {
				"Modify the interaction between OpenID Connect and WordPress users."
			}
			Section::AuthorizationSettings => "Control the authorization mechanics of the site.",
			Section::LogSettings => {
				"Log information about login attempts through OpenID Connect Generic."
			}
		}
	}
}

impl fmt::Display for Section {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.id())
	}
}

/// One configurable setting
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDefinition {
	key: String,
	name: String,

	pub title: String,
	pub description: String,
	pub example: Option<String>,
	#[serde(rename = "type")]
	pub field_type: FieldType,
	pub section: Section,
	/// Stored value -> display label; only for `select`
	pub options: Option<IndexMap<String, String>>,
	pub disabled: bool,
	pub readonly: bool,
	/// Value used while the record has none for this key
	pub default: Option<SettingValue>,
}

impl FieldDefinition {
	pub fn builder() -> FieldDefinitionBuilder {
		FieldDefinitionBuilder::new()
	}

	pub fn key(&self) -> &str {
		&self.key
	}

	/// Storage-qualified form name, `prefix[key]`
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Stamp the key and derived name. Called once by the schema after hooks ran.
	pub fn annotate(&mut self, prefix: &str, key: &str) {
		self.key = key.to_string();
		self.name = format!("{}[{}]", prefix, key);
	}

	/// Structural checks shared by the builder and the post-hook schema pass
	pub fn validate(&self) -> ClResult<()> {
		if self.title.trim().is_empty() {
			return Err(Error::ConfigError("Field title is required".into()));
		}

		if let FieldType::Input(typ) = &self.field_type {
			let valid = !typ.is_empty()
				&& typ.chars().all(|c| c.is_ascii_lowercase() || c == '-')
				&& typ.starts_with(|c: char| c.is_ascii_lowercase());
			if !valid {
				return Err(Error::ConfigError(format!("Invalid field type '{}'", typ)));
			}
		}

		match (&self.field_type, &self.options) {
			(FieldType::Select, None) => {
				Err(Error::ConfigError("Select fields require options".into()))
			}
			(FieldType::Select, Some(options)) if options.is_empty() => {
				Err(Error::ConfigError("Select fields require at least one option".into()))
			}
			(FieldType::Select, Some(_)) | (_, None) => Ok(()),
			(typ, Some(_)) => {
				Err(Error::ConfigError(format!("Options are only allowed on select fields, not {}", typ)))
			}
		}
	}
}

/// Builder for FieldDefinition with fluent API
#[derive(Debug)]
pub struct FieldDefinitionBuilder {
	title: Option<String>,
	description: String,
	example: Option<String>,
	field_type: Option<FieldType>,
	section: Option<Section>,
	options: Option<IndexMap<String, String>>,
	disabled: bool,
	readonly: bool,
	default: Option<SettingValue>,
}

impl FieldDefinitionBuilder {
	pub fn new() -> Self {
		Self {
			title: None,
			description: String::new(),
			example: None,
			field_type: None,
			section: None,
			options: None,
			disabled: false,
			readonly: false,
			default: None,
		}
	}

	/// Set the title (required)
	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.description = description.into();
		self
	}

	pub fn example(mut self, example: impl Into<String>) -> Self {
		self.example = Some(example.into());
		self
	}

	/// Set the field type (required)
	pub fn field_type(mut self, field_type: FieldType) -> Self {
		self.field_type = Some(field_type);
		self
	}

	/// Set the section (required)
	pub fn section(mut self, section: Section) -> Self {
		self.section = Some(section);
		self
	}

	/// Append a select option
	pub fn option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
		self.options.get_or_insert_with(IndexMap::new).insert(value.into(), label.into());
		self
	}

	pub fn disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}

	pub fn readonly(mut self, readonly: bool) -> Self {
		self.readonly = readonly;
		self
	}

	pub fn default(mut self, value: impl Into<SettingValue>) -> Self {
		self.default = Some(value.into());
		self
	}

	/// Build the FieldDefinition. Key and name are stamped later by the schema.
	pub fn build(self) -> ClResult<FieldDefinition> {
		let title = self.title.ok_or_else(|| Error::ConfigError("Field title is required".into()))?;
		let field_type =
			self.field_type.ok_or_else(|| Error::ConfigError("Field type is required".into()))?;
		let section =
			self.section.ok_or_else(|| Error::ConfigError("Field section is required".into()))?;

		let def = FieldDefinition {
			key: String::new(),
			name: String::new(),
			title,
			description: self.description,
			example: self.example,
			field_type,
			section,
			options: self.options,
			disabled: self.disabled,
			readonly: self.readonly,
			default: self.default,
		};
		def.validate()?;
		Ok(def)
	}
}

impl Default for FieldDefinitionBuilder {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn text_field() -> FieldDefinitionBuilder {
		FieldDefinition::builder()
			.title("Client ID")
			.field_type(FieldType::Text)
			.section(Section::ClientSettings)
	}

	#[test]
	fn test_builder_requires_type() {
		let result = FieldDefinition::builder()
			.title("Client ID")
			.section(Section::ClientSettings)
			.build();
		assert!(matches!(result, Err(Error::ConfigError(msg)) if msg.contains("type")));
	}

	#[test]
	fn test_default_builder_is_empty() {
		let result = <FieldDefinitionBuilder as Default>::default().build();
		assert!(matches!(result, Err(Error::ConfigError(msg)) if msg.contains("title")));
	}

	#[test]
	fn test_builder_requires_section() {
		let result =
			FieldDefinition::builder().title("Client ID").field_type(FieldType::Text).build();
		assert!(matches!(result, Err(Error::ConfigError(msg)) if msg.contains("section")));
	}

	#[test]
	fn test_select_requires_options() {
		let result = FieldDefinition::builder()
			.title("Login Type")
			.field_type(FieldType::Select)
			.section(Section::ClientSettings)
			.build();
		assert!(result.is_err());
	}

	#[test]
	fn test_options_rejected_on_text() {
		assert!(text_field().option("a", "A").build().is_err());
	}

	#[test]
	fn test_annotate_derives_name() {
		let mut def = text_field().build().unwrap();
		def.annotate("openid_connect_generic_settings", "client_id");
		assert_eq!(def.key(), "client_id");
		assert_eq!(def.name(), "openid_connect_generic_settings[client_id]");
	}

	#[test]
	fn test_field_type_from_str() {
		assert_eq!(FieldType::from("number"), FieldType::Number);
		assert_eq!(FieldType::from("password"), FieldType::Input("password".into()));
		assert!(
			text_field().field_type(FieldType::Input("bad type".into())).build().is_err()
		);
	}

	#[test]
	fn test_serialize_uses_type_name() {
		let def = text_field().build().unwrap();
		let json = serde_json::to_value(&def).unwrap();
		assert_eq!(json["type"], "text");
		assert_eq!(json["section"], "client_settings");
	}
}

// vim: ts=4
