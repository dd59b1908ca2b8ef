//! Allow-list sanitizer
//!
//! The schema, not the submission, decides which keys end up in the stored
//! record. Unknown keys are dropped, missing keys become empty strings, and
//! every present value is reduced to safe plain text. Sanitization never
//! fails.

pub mod filter;
pub mod form;

use itertools::Itertools;
use std::sync::Arc;

pub use filter::TextFilter;
pub use form::raw_input_from_form;

use crate::prelude::*;
use crate::schema::FieldSchema;

pub struct Sanitizer {
	schema: Arc<FieldSchema>,
	filter: Arc<TextFilter>,
}

impl Sanitizer {
	pub fn new(schema: Arc<FieldSchema>, filter: Arc<TextFilter>) -> Self {
		Self { schema, filter }
	}

	/// Produce the replacement settings record for a raw submission
	pub fn sanitize(&self, raw: &RawInput) -> SettingsRecord {
		let dropped = raw.keys().filter(|key| !self.schema.contains(key)).join(", ");
		if !dropped.is_empty() {
			warn!("Dropping unknown submitted settings: {}", dropped);
		}

		let record: SettingsRecord = self
			.schema
			.keys()
			.map(|key| {
				let value = raw.get(key).map(|v| self.filter.plain_text(&coerce_text(v)));
				(key.to_string(), SettingValue::Text(value.unwrap_or_default()))
			})
			.collect();

		debug!("Sanitized submission into {} settings", record.len());
		record
	}
}

/// Text form of a submitted value. Values with no scalar text form become empty.
fn coerce_text(value: &serde_json::Value) -> String {
	match value {
		serde_json::Value::String(s) => s.clone(),
		serde_json::Value::Number(n) => n.to_string(),
		serde_json::Value::Bool(true) => "1".to_string(),
		serde_json::Value::Bool(false)
		| serde_json::Value::Null
		| serde_json::Value::Array(_)
		| serde_json::Value::Object(_) => String::new(),
	}
}


// vim: ts=4
