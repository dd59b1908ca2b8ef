//! Demo host: registers the settings page in memory, prints it, applies a
//! form submission and prints the page again.

mod host;
mod store;

use std::sync::Arc;
use std::{env, path};

use oidc_settings::error::ClResult;
use oidc_settings::{SettingsPage, SettingsPageOpts};
use tracing::{error, info};

use crate::host::{ConsoleHost, MemoryLogs};
use crate::store::JsonFileStore;

const SAMPLE_FORM: &str = concat!(
	"option_page=openid-connect-generic-settings-group",
	"&openid_connect_generic_settings%5Bclient_id%5D=+demo-client+",
	"&openid_connect_generic_settings%5Bscope%5D=openid+email+profile",
	"&openid_connect_generic_settings%5Bendpoint_login%5D=https%3A%2F%2Fidp.example.com%2Fauthorize",
	"&openid_connect_generic_settings%5Benable_logging%5D=0",
	"&openid_connect_generic_settings%5Benable_logging%5D=1",
	"&openid_connect_generic_settings%5Bunknown%5D=dropped",
);

pub struct Config {
	/// Directory holding one JSON file per stored option; memory only when unset
	pub data_dir: Option<path::PathBuf>,
	pub site_url: String,
	/// Urlencoded form body to save after the first render
	pub form: String,
}

impl Config {
	pub fn from_env() -> Self {
		Config {
			data_dir: env::var("OIDC_SETTINGS_DATA").ok().map(path::PathBuf::from),
			site_url: env::var("OIDC_SITE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string()),
			form: env::var("OIDC_SETTINGS_FORM").unwrap_or_else(|_| SAMPLE_FORM.to_string()),
		}
	}
}

fn run(config: Config) -> ClResult<()> {
	let store = Arc::new(JsonFileStore::new(config.data_dir.clone())?);
	let logs = Arc::new(MemoryLogs::default());

	let page = SettingsPage::builder(SettingsPageOpts::default())
		.store(store)
		.logs(logs.clone())
		.build()?;

	let mut host = ConsoleHost::new(config.site_url);
	page.register_all(&mut host)?;

	let slug = page.opts().page_slug.clone();
	println!("{}", host.display(&slug)?);

	let record = page.save_form(&config.form)?;
	logs.record(format!("settings saved with {} keys", record.len()));
	println!("{}", host.display(&slug)?);
	Ok(())
}

fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_target(false)
		.init();

	let config = Config::from_env();
	info!("Starting basic host for {}", config.site_url);
	if let Err(err) = run(config) {
		error!("Settings page failed: {}", err);
		std::process::exit(1);
	}
}

// vim: ts=4
