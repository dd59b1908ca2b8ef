//! Reusable settings pages and submissions

use std::sync::Arc;

use oidc_settings::error::ClResult;
use oidc_settings::overrides::DeploymentOverrides;
use oidc_settings::record::{RawInput, SettingsRecord};
use oidc_settings::{SettingsPage, SettingsPageBuilder, SettingsPageOpts};

use super::host::{MemoryStore, StaticLogs};

pub const OPTION: &str = "openid_connect_generic_settings";
pub const SLUG: &str = "openid-connect-generic-settings";

/// Page builder with no overrides, an empty store and a static log table
pub fn page_builder(store: Arc<MemoryStore>) -> SettingsPageBuilder {
	SettingsPage::builder(SettingsPageOpts::default())
		.overrides(DeploymentOverrides::new())
		.store(store)
		.logs(Arc::new(StaticLogs))
}

pub fn empty_page() -> (Arc<SettingsPage>, Arc<MemoryStore>) {
	let store = Arc::new(MemoryStore::default());
	let page = page_builder(store.clone()).build().unwrap();
	(page, store)
}

pub fn page_with_stored(record: SettingsRecord) -> ClResult<(Arc<SettingsPage>, Arc<MemoryStore>)> {
	let store = Arc::new(MemoryStore::with_option(OPTION, record));
	let page = page_builder(store.clone()).build()?;
	Ok((page, store))
}

pub fn raw(value: serde_json::Value) -> RawInput {
	value.as_object().cloned().unwrap_or_default()
}

/// A complete, realistic submission for the canonical schema
pub fn full_submission() -> RawInput {
	raw(serde_json::json!({
		"login_type": "auto",
		"client_id": "wordpress-client",
		"client_secret": "s3cr3t",
		"scope": "email profile openid offline_access",
		"endpoint_login": "https://idp.example.com/oauth2/authorize",
		"endpoint_userinfo": "https://idp.example.com/oauth2/UserInfo",
		"endpoint_token": "https://idp.example.com/oauth2/token",
		"acr_values": "",
		"identity_key": "sub",
		"no_sslverify": "0",
		"http_request_timeout": "10",
		"enforce_privacy": "1",
		"alternate_redirect_uri": "0",
		"nickname_key": "preferred_username",
		"email_format": "{email}",
		"displayname_format": "{given_name} {family_name}",
		"identify_with_username": "0",
		"state_time_limit": "180",
		"token_refresh_enable": "1",
		"link_existing_users": "1",
		"create_if_does_not_exist": "1",
		"redirect_user_back": "0",
		"redirect_on_logout": "1",
		"enable_logging": "1",
		"log_limit": "1000"
	}))
}

// vim: ts=4
