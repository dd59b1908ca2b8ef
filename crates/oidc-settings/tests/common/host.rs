//! In-memory host framework for integration tests

use parking_lot::RwLock;
use std::collections::HashMap;

use oidc_settings::error::{ClResult, Error};
use oidc_settings::host_adapter::{
	FieldRegistration, HostFrontend, HostRegistrar, PageRegistration, SectionRegistration,
	SettingRegistration,
};
use oidc_settings::log_adapter::LogProvider;
use oidc_settings::option_store::OptionStore;
use oidc_settings::record::{RawInput, SettingsRecord};

pub const SITE: &str = "https://example.test";

#[derive(Default)]
pub struct TestHost {
	pub pages: Vec<PageRegistration>,
	pub sections: Vec<SectionRegistration>,
	pub fields: Vec<FieldRegistration>,
	pub settings: Vec<SettingRegistration>,
}

impl TestHost {
	pub fn new() -> Self {
		Self::default()
	}

	/// Display a registered page, as the host does after its capability check
	pub fn display(&self, slug: &str) -> ClResult<String> {
		let page = self.pages.iter().find(|p| p.slug == slug).ok_or(Error::NotFound)?;
		(page.render)(self)
	}

	/// Run a submission through the sanitize callback registered for an option
	pub fn submit(&self, option_name: &str, raw: &RawInput) -> ClResult<SettingsRecord> {
		let setting =
			self.settings.iter().find(|s| s.option_name == option_name).ok_or(Error::NotFound)?;
		Ok((setting.sanitize)(raw))
	}
}

impl HostRegistrar for TestHost {
	fn register_page(&mut self, page: PageRegistration) -> ClResult<()> {
		self.pages.push(page);
		Ok(())
	}

	fn register_section(&mut self, section: SectionRegistration) -> ClResult<()> {
		self.sections.push(section);
		Ok(())
	}

	fn register_field(&mut self, field: FieldRegistration) -> ClResult<()> {
		if !self.sections.iter().any(|s| s.id == field.section_id && s.page_slug == field.page_slug)
		{
			return Err(Error::NotFound);
		}
		self.fields.push(field);
		Ok(())
	}

	fn register_setting(&mut self, setting: SettingRegistration) -> ClResult<()> {
		self.settings.push(setting);
		Ok(())
	}
}

impl HostFrontend for TestHost {
	fn settings_fields(&self, group: &str) -> String {
		format!(r#"<input type="hidden" name="option_page" value="{}">"#, group)
	}

	fn render_sections(&self, page_slug: &str, record: &SettingsRecord) -> ClResult<String> {
		let mut out = String::new();
		for section in self.sections.iter().filter(|s| s.page_slug == page_slug) {
			out.push_str(&format!("<h2>{}</h2>", section.title));
			out.push_str(&(section.description)()?);
			out.push_str(r#"<table class="form-table">"#);
			for field in self.fields.iter().filter(|f| f.section_id == section.id) {
				let markup = (field.render)(&field.field, record)?;
				out.push_str(&format!("<tr><th>{}</th><td>{}</td></tr>", field.title, markup));
			}
			out.push_str("</table>");
		}
		Ok(out)
	}

	fn submit_button(&self) -> String {
		r#"<input type="submit" name="submit" class="button button-primary" value="Save Changes">"#
			.to_string()
	}

	fn admin_url(&self, path: &str) -> String {
		format!("{}/wp-admin/{}", SITE, path)
	}

	fn site_url(&self, path: &str) -> String {
		format!("{}/{}", SITE, path.trim_start_matches('/'))
	}

	fn asset_url(&self, path: &str) -> String {
		format!("{}/wp-content/plugins/openid-connect-generic/{}", SITE, path)
	}
}

#[derive(Default)]
pub struct MemoryStore {
	options: RwLock<HashMap<String, SettingsRecord>>,
}

impl MemoryStore {
	pub fn with_option(name: &str, record: SettingsRecord) -> Self {
		let store = Self::default();
		store.options.write().insert(name.to_string(), record);
		store
	}

	pub fn get(&self, name: &str) -> Option<SettingsRecord> {
		self.options.read().get(name).cloned()
	}
}

impl OptionStore for MemoryStore {
	fn read_option(&self, name: &str) -> ClResult<Option<SettingsRecord>> {
		Ok(self.options.read().get(name).cloned())
	}

	fn write_option(&self, name: &str, record: SettingsRecord) -> ClResult<()> {
		self.options.write().insert(name.to_string(), record);
		Ok(())
	}
}

pub struct StaticLogs;

pub const LOG_TABLE: &str = r#"<table id="logger-table"><tr><td>login attempt</td></tr></table>"#;

impl LogProvider for StaticLogs {
	fn render_logs_table(&self) -> ClResult<String> {
		Ok(LOG_TABLE.to_string())
	}
}

// vim: ts=4
