//! Minimal in-process host: keeps registrations in memory and renders
//! sections as plain tables

use parking_lot::RwLock;

use oidc_settings::error::{ClResult, Error};
use oidc_settings::host_adapter::{
	FieldRegistration, HostFrontend, HostRegistrar, PageRegistration, SectionRegistration,
	SettingRegistration,
};
use oidc_settings::log_adapter::LogProvider;
use oidc_settings::record::SettingsRecord;
use oidc_settings::render::escape_html;
use tracing::debug;

pub struct ConsoleHost {
	site_url: String,
	pages: Vec<PageRegistration>,
	sections: Vec<SectionRegistration>,
	fields: Vec<FieldRegistration>,
	settings: Vec<SettingRegistration>,
}

impl ConsoleHost {
	pub fn new(site_url: impl Into<String>) -> Self {
		Self {
			site_url: site_url.into().trim_end_matches('/').to_string(),
			pages: Vec::new(),
			sections: Vec::new(),
			fields: Vec::new(),
			settings: Vec::new(),
		}
	}

	pub fn display(&self, slug: &str) -> ClResult<String> {
		let page = self.pages.iter().find(|p| p.slug == slug).ok_or(Error::NotFound)?;
		debug!("Displaying page {} (requires {})", page.slug, page.capability);
		(page.render)(self)
	}
}

impl HostRegistrar for ConsoleHost {
	fn register_page(&mut self, page: PageRegistration) -> ClResult<()> {
		if self.pages.iter().any(|p| p.slug == page.slug) {
			return Err(Error::ConfigError(format!("Page '{}' is already registered", page.slug)));
		}
		self.pages.push(page);
		Ok(())
	}

	fn register_section(&mut self, section: SectionRegistration) -> ClResult<()> {
		self.sections.push(section);
		Ok(())
	}

	fn register_field(&mut self, field: FieldRegistration) -> ClResult<()> {
		if !self.sections.iter().any(|s| s.id == field.section_id) {
			return Err(Error::ConfigError(format!(
				"Field '{}' refers to unknown section '{}'",
				field.key, field.section_id
			)));
		}
		self.fields.push(field);
		Ok(())
	}

	fn register_setting(&mut self, setting: SettingRegistration) -> ClResult<()> {
		debug!("Option {} bound to group {}", setting.option_name, setting.group);
		self.settings.push(setting);
		Ok(())
	}
}

impl HostFrontend for ConsoleHost {
	fn settings_fields(&self, group: &str) -> String {
		format!(r#"<input type="hidden" name="option_page" value="{}">"#, escape_html(group))
	}

	fn render_sections(&self, page_slug: &str, record: &SettingsRecord) -> ClResult<String> {
		let mut out = String::new();
		for section in self.sections.iter().filter(|s| s.page_slug == page_slug) {
			out.push_str(&format!("<h2>{}</h2>\n", escape_html(&section.title)));
			out.push_str(&(section.description)()?);
			out.push_str("\n<table class=\"form-table\">\n");
			for field in self
				.fields
				.iter()
				.filter(|f| f.page_slug == page_slug && f.section_id == section.id)
			{
				out.push_str(&format!(
					"<tr><th scope=\"row\"><label for=\"{}\">{}</label></th><td>{}</td></tr>\n",
					escape_html(&field.key),
					escape_html(&field.title),
					(field.render)(&field.field, record)?
				));
			}
			out.push_str("</table>\n");
		}
		Ok(out)
	}

	fn submit_button(&self) -> String {
		r#"<p class="submit"><input type="submit" name="submit" class="button button-primary" value="Save Changes"></p>"#
			.to_string()
	}

	fn admin_url(&self, path: &str) -> String {
		format!("{}/admin/{}", self.site_url, path.trim_start_matches('/'))
	}

	fn site_url(&self, path: &str) -> String {
		format!("{}/{}", self.site_url, path.trim_start_matches('/'))
	}

	fn asset_url(&self, path: &str) -> String {
		format!("{}/assets/{}", self.site_url, path.trim_start_matches('/'))
	}
}

/// Log provider keeping entries in memory
#[derive(Default)]
pub struct MemoryLogs {
	entries: RwLock<Vec<String>>,
}

impl MemoryLogs {
	pub fn record(&self, entry: impl Into<String>) {
		self.entries.write().push(entry.into());
	}
}

impl LogProvider for MemoryLogs {
	fn render_logs_table(&self) -> ClResult<String> {
		let entries = self.entries.read();
		let mut out = String::from(r#"<table class="wp-list-table widefat fixed striped">"#);
		out.push_str("<thead><tr><th>Details</th></tr></thead><tbody>");
		for entry in entries.iter().rev() {
			out.push_str(&format!("<tr><td>{}</td></tr>", escape_html(entry)));
		}
		out.push_str("</tbody></table>");
		Ok(out)
	}
}

// vim: ts=4
