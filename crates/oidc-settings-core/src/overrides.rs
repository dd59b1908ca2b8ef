//! Deployment-level overrides
//!
//! A setting fixed by the deployment (an `OIDC_*` environment variable) can not
//! be edited from the settings page. The field is rendered disabled and the
//! deployment value is what the page shows.

use std::collections::HashMap;

use oidc_settings_types::value::is_truthy_str;

use crate::prelude::*;
use crate::schema::FieldSchema;

/// Field key -> environment variable that locks it
pub const OVERRIDE_VARIABLES: &[(&str, &str)] = &[
	("login_type", "OIDC_LOGIN_TYPE"),
	("client_id", "OIDC_CLIENT_ID"),
	("client_secret", "OIDC_CLIENT_SECRET"),
	("scope", "OIDC_CLIENT_SCOPE"),
	("endpoint_login", "OIDC_ENDPOINT_LOGIN_URL"),
	("endpoint_userinfo", "OIDC_ENDPOINT_USERINFO_URL"),
	("endpoint_token", "OIDC_ENDPOINT_TOKEN_URL"),
	("acr_values", "OIDC_ACR_VALUES"),
	("enforce_privacy", "OIDC_ENFORCE_PRIVACY"),
	("link_existing_users", "OIDC_LINK_EXISTING_USERS"),
	("create_if_does_not_exist", "OIDC_CREATE_IF_DOES_NOT_EXIST"),
	("redirect_user_back", "OIDC_REDIRECT_USER_BACK"),
	("redirect_on_logout", "OIDC_REDIRECT_ON_LOGOUT"),
];

#[derive(Debug, Clone, Default)]
pub struct DeploymentOverrides {
	values: HashMap<String, String>,
}

impl DeploymentOverrides {
	pub fn new() -> Self {
		Self::default()
	}

	/// Read the fixed override variables from the process environment
	pub fn from_env() -> Self {
		Self::from_lookup(|var| std::env::var(var).ok())
	}

	/// Resolve the override variables through an arbitrary lookup
	pub fn from_lookup<F>(lookup: F) -> Self
	where
		F: Fn(&str) -> Option<String>,
	{
		let mut values = HashMap::new();
		for (key, var) in OVERRIDE_VARIABLES {
			if let Some(value) = lookup(var) {
				debug!("Setting '{}' locked by {}", key, var);
				values.insert((*key).to_string(), value);
			}
		}
		if !values.is_empty() {
			info!("{} settings fixed by deployment overrides", values.len());
		}
		Self { values }
	}

	/// Build from `(VARIABLE, value)` pairs, ignoring unknown variables
	pub fn from_vars<I, K, V>(vars: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: Into<String>,
	{
		let vars: HashMap<String, String> =
			vars.into_iter().map(|(k, v)| (k.as_ref().to_string(), v.into())).collect();
		Self::from_lookup(|var| vars.get(var).cloned())
	}

	/// Lock an arbitrary field key, e.g. one added by an extension hook
	pub fn lock(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.values.insert(key.into(), value.into());
	}

	pub fn is_locked(&self, key: &str) -> bool {
		self.values.contains_key(key)
	}

	/// Keys fixed by the deployment, in no particular order
	pub fn locked_keys(&self) -> impl Iterator<Item = &str> {
		self.values.keys().map(String::as_str)
	}

	pub fn value(&self, key: &str) -> Option<&str> {
		self.values.get(key).map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Replace record values with the deployment values of locked schema fields.
	/// Checkbox values are normalized to 0/1 so the checkbox renders checked.
	pub fn apply(&self, schema: &FieldSchema, record: &mut SettingsRecord) {
		for def in schema.iter() {
			let Some(value) = self.value(def.key()) else {
				continue;
			};
			let value = match def.field_type {
				FieldType::Checkbox => SettingValue::Int(i64::from(is_truthy_str(value))),
				_ => SettingValue::Text(value.to_string()),
			};
			record.insert(def.key(), value);
		}
	}
}


// vim: ts=4
