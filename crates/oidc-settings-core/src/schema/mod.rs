//! Field schema: canonical field list, extension hooks, and the frozen schema
//!
//! # Lifecycle
//!
//! 1. The canonical fields are registered into a mutable [`FieldRegistry`]
//! 2. Extension hooks are registered on the same registry
//! 3. [`FieldRegistry::freeze`] runs the hooks in order, stamps `key`/`name`
//!    on every definition and validates the result
//! 4. The [`FieldSchema`] is shared read-only for the rest of the process

pub mod fields;
pub mod registry;

pub use fields::{CANONICAL_KEYS, register_fields};
pub use registry::{FieldRegistry, FieldSchema, SchemaHook};

use oidc_settings_types::translate::Translator;

use crate::overrides::DeploymentOverrides;
use crate::prelude::*;

/// Build the frozen schema: canonical fields, then `hooks` in order. Every
/// key locked by `overrides` ends up disabled, whoever added the field.
pub fn build_schema(
	prefix: &str,
	translator: &dyn Translator,
	overrides: &DeploymentOverrides,
	hooks: Vec<(String, SchemaHook)>,
) -> ClResult<FieldSchema> {
	let mut registry = FieldRegistry::new();
	register_fields(&mut registry, translator)?;
	for (name, hook) in hooks {
		registry.add_hook(name, hook);
	}
	for key in overrides.locked_keys() {
		registry.lock(key);
	}
	registry.freeze(prefix)
}

#[cfg(test)]
mod tests {
	use super::*;
	use oidc_settings_types::translate::Untranslated;

	const PREFIX: &str = "openid_connect_generic_settings";

	#[test]
	fn test_env_overrides_disable_fields() {
		let overrides = DeploymentOverrides::from_vars([("OIDC_CLIENT_ID", "fixed")]);
		let schema = build_schema(PREFIX, &Untranslated, &overrides, Vec::new()).unwrap();
		assert!(schema.get("client_id").unwrap().disabled);
		assert!(!schema.get("client_secret").unwrap().disabled);
		assert!(schema.iter().all(|d| !d.readonly));
	}

	#[test]
	fn test_locked_hook_field_is_disabled() {
		let mut overrides = DeploymentOverrides::new();
		overrides.lock("extra_field", "fixed");
		overrides.lock("no_sslverify", "1");
		let hook: SchemaHook = Box::new(|mut fields: FieldMap| -> ClResult<FieldMap> {
			let def = FieldDefinition::builder()
				.title("Extra Field")
				.field_type(FieldType::Text)
				.section(Section::ClientSettings)
				.build()?;
			fields.insert("extra_field".into(), def);
			Ok(fields)
		});
		let schema =
			build_schema(PREFIX, &Untranslated, &overrides, vec![("extra".into(), hook)]).unwrap();
		assert!(schema.get("extra_field").unwrap().disabled);
		assert!(schema.get("no_sslverify").unwrap().disabled);
		assert!(!schema.get("client_id").unwrap().disabled);
	}
}

// vim: ts=4
