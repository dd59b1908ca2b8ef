//! Renderer dispatch
//!
//! Each field type maps to one render function: `checkbox` and `select` have
//! their own, every other type is a text input whose `type` attribute is the
//! declared field type. All of them end with the shared description block.

pub mod templates;

use handlebars::Handlebars;
use serde::Serialize;
use std::sync::Arc;

use oidc_settings_types::translate::Translator;

use crate::prelude::*;
use crate::sanitize::TextFilter;

/// Signature shared by the per-type render functions
pub type RenderFn = fn(&Renderer, &FieldDefinition, &SettingValue) -> ClResult<String>;

/// Dispatch table: field type -> render function
pub fn renderer_for(field_type: &FieldType) -> RenderFn {
	match field_type {
		FieldType::Checkbox => Renderer::render_checkbox,
		FieldType::Select => Renderer::render_select,
		FieldType::Text | FieldType::Number | FieldType::Input(_) => Renderer::render_text_field,
	}
}

/// Escape text for HTML content and quoted attribute values. Existing
/// character references (`&lt;`, `&#039;`, `&#x3c;`) are kept as they are, so
/// text the sanitizer already encoded is not encoded twice.
pub fn escape_html(s: &str) -> String {
	let mut out = String::with_capacity(s.len());
	for (i, c) in s.char_indices() {
		match c {
			'&' if is_char_reference(&s[i..]) => out.push('&'),
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#039;"),
			c => out.push(c),
		}
	}
	out
}

/// Whether `s` starts with a named, decimal or hexadecimal character reference
fn is_char_reference(s: &str) -> bool {
	let Some(end) = s.find(';') else {
		return false;
	};
	let body = &s[1..end];
	if let Some(num) = body.strip_prefix('#') {
		return match num.strip_prefix(['x', 'X']) {
			Some(hex) => !hex.is_empty() && hex.len() <= 6 && hex.chars().all(|c| c.is_ascii_hexdigit()),
			None => !num.is_empty() && num.len() <= 7 && num.chars().all(|c| c.is_ascii_digit()),
		};
	}
	!body.is_empty() && body.len() <= 32 && body.chars().all(|c| c.is_ascii_alphanumeric())
}

#[derive(Serialize)]
struct DescriptionContext {
	description: String,
	has_example: bool,
	example: String,
	example_label: String,
}

#[derive(Serialize)]
struct TextFieldContext<'a> {
	key: &'a str,
	name: &'a str,
	input_type: &'a str,
	value: String,
	disabled: bool,
	readonly: bool,
	#[serde(flatten)]
	description: DescriptionContext,
}

#[derive(Serialize)]
struct CheckboxContext<'a> {
	key: &'a str,
	name: &'a str,
	shadow_value: i64,
	checked: bool,
	disabled: bool,
	readonly: bool,
	#[serde(flatten)]
	description: DescriptionContext,
}

#[derive(Serialize)]
struct SelectOptionContext<'a> {
	value: &'a str,
	label: &'a str,
	selected: bool,
	/// Readonly selects lock every option but the selected one
	locked: bool,
}

#[derive(Serialize)]
struct SelectContext<'a> {
	key: &'a str,
	name: &'a str,
	value: String,
	disabled: bool,
	options: Vec<SelectOptionContext<'a>>,
	#[serde(flatten)]
	description: DescriptionContext,
}

/// Everything the page template needs, already translated
#[derive(Debug, Serialize)]
pub struct PageContext {
	pub title: String,
	pub logo_url: String,
	pub form_action: String,
	/// Host markup, inserted unescaped
	pub settings_fields: String,
	/// Host markup, inserted unescaped
	pub sections: String,
	/// Host markup, inserted unescaped
	pub submit_button: String,
	pub notes_label: String,
	pub redirect_uri_label: String,
	pub redirect_uri: String,
	pub login_button_label: String,
	pub login_button_shortcode: String,
	pub auth_url_label: String,
	pub auth_url_shortcode: String,
	pub show_logs: bool,
	pub logs_label: String,
	/// Log provider markup, inserted unescaped
	pub logs_table: String,
}

/// Template engine for settings markup
pub struct Renderer {
	handlebars: Handlebars<'static>,
	filter: Arc<TextFilter>,
	example_label: String,
}

impl Renderer {
	pub fn new(filter: Arc<TextFilter>, translator: &dyn Translator) -> ClResult<Self> {
		let mut handlebars = Handlebars::new();

		// Every context carries all variables; a missing one is a template bug
		handlebars.set_strict_mode(true);
		handlebars.register_escape_fn(escape_html);

		handlebars.register_partial("description", templates::DESCRIPTION)?;
		handlebars.register_template_string("text_field", templates::TEXT_FIELD)?;
		handlebars.register_template_string("checkbox", templates::CHECKBOX)?;
		handlebars.register_template_string("select", templates::SELECT)?;
		handlebars.register_template_string("section_description", templates::SECTION_DESCRIPTION)?;
		handlebars.register_template_string("page", templates::PAGE)?;

		Ok(Self { handlebars, filter, example_label: translator.translate("Example") })
	}

	/// Render a field with its current value, dispatching on the field type
	pub fn render(&self, def: &FieldDefinition, value: &SettingValue) -> ClResult<String> {
		renderer_for(&def.field_type)(self, def, value)
	}

	/// Text-like input; the `type` attribute is the declared field type
	pub fn render_text_field(&self, def: &FieldDefinition, value: &SettingValue) -> ClResult<String> {
		let ctx = TextFieldContext {
			key: def.key(),
			name: def.name(),
			input_type: def.field_type.as_str(),
			value: value.to_text(),
			disabled: def.disabled,
			readonly: def.readonly,
			description: self.description_context(def),
		};
		Ok(self.handlebars.render("text_field", &ctx)?)
	}

	/// Hidden input followed by the visible checkbox, so the submission always
	/// carries a value for the key. A disabled checkbox keeps its stored value
	/// through the hidden input.
	pub fn render_checkbox(&self, def: &FieldDefinition, value: &SettingValue) -> ClResult<String> {
		let current = value.as_int();
		let ctx = CheckboxContext {
			key: def.key(),
			name: def.name(),
			shadow_value: if def.disabled { current.unwrap_or(0) } else { 0 },
			checked: current == Some(1),
			disabled: def.disabled,
			readonly: def.readonly,
			description: self.description_context(def),
		};
		Ok(self.handlebars.render("checkbox", &ctx)?)
	}

	/// Option list; the option whose key equals the current value is selected
	pub fn render_select(&self, def: &FieldDefinition, value: &SettingValue) -> ClResult<String> {
		let current = value.to_text();
		let options = def
			.options
			.iter()
			.flatten()
			.map(|(option_value, label)| {
				let selected = *option_value == current;
				SelectOptionContext {
					value: option_value,
					label,
					selected,
					locked: def.readonly && !selected,
				}
			})
			.collect();
		let ctx = SelectContext {
			key: def.key(),
			name: def.name(),
			value: current,
			disabled: def.disabled,
			options,
			description: self.description_context(def),
		};
		Ok(self.handlebars.render("select", &ctx)?)
	}

	/// Plain text paragraph introducing a section
	pub fn render_section_description(&self, text: &str) -> ClResult<String> {
		Ok(self.handlebars.render("section_description", &serde_json::json!({ "text": text }))?)
	}

	pub fn render_page(&self, ctx: &PageContext) -> ClResult<String> {
		Ok(self.handlebars.render("page", ctx)?)
	}

	fn description_context(&self, def: &FieldDefinition) -> DescriptionContext {
		DescriptionContext {
			description: self.filter.rich_text(&def.description),
			has_example: def.example.is_some(),
			example: def.example.clone().unwrap_or_default(),
			example_label: self.example_label.clone(),
		}
	}
}


// vim: ts=4
