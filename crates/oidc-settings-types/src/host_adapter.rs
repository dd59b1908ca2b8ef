//! Host application adapter traits
//!
//! The host owns menus, sections, form plumbing and request dispatch. The
//! engine only hands it registrations with callbacks, and asks it for a few
//! rendering helpers while assembling the settings page.

use std::sync::Arc;

use crate::field::FieldDefinition;
use crate::prelude::*;
use crate::record::{RawInput, SettingsRecord};

/// Renders the whole settings page
pub type PageRenderFn = Arc<dyn Fn(&dyn HostFrontend) -> ClResult<String> + Send + Sync>;

/// Renders the introduction text of a section
pub type SectionDescriptionFn = Arc<dyn Fn() -> ClResult<String> + Send + Sync>;

/// Renders one field from the current settings snapshot
pub type FieldRenderFn =
	Arc<dyn Fn(&FieldDefinition, &SettingsRecord) -> ClResult<String> + Send + Sync>;

/// Turns a raw submission into the replacement settings record. Total.
pub type SanitizeFn = Arc<dyn Fn(&RawInput) -> SettingsRecord + Send + Sync>;

pub struct PageRegistration {
	pub title: String,
	pub menu_title: String,
	/// Capability the host checks before dispatching to `render`
	pub capability: String,
	pub slug: String,
	pub render: PageRenderFn,
}

pub struct SectionRegistration {
	pub id: String,
	pub title: String,
	pub description: SectionDescriptionFn,
	pub page_slug: String,
}

pub struct FieldRegistration {
	pub key: String,
	pub title: String,
	pub render: FieldRenderFn,
	pub page_slug: String,
	pub section_id: String,
	pub field: FieldDefinition,
}

pub struct SettingRegistration {
	pub group: String,
	pub option_name: String,
	pub sanitize: SanitizeFn,
}

/// Registration side of the host framework
pub trait HostRegistrar {
	fn register_page(&mut self, page: PageRegistration) -> ClResult<()>;
	fn register_section(&mut self, section: SectionRegistration) -> ClResult<()>;
	fn register_field(&mut self, field: FieldRegistration) -> ClResult<()>;
	fn register_setting(&mut self, setting: SettingRegistration) -> ClResult<()>;
}

/// Rendering helpers the host provides while a page is being displayed
pub trait HostFrontend {
	/// Hidden form fields binding the submission to an option group (nonce, referer, ...)
	fn settings_fields(&self, group: &str) -> String;

	/// Output of every section and field registered for a page, in registration order
	fn render_sections(&self, page_slug: &str, record: &SettingsRecord) -> ClResult<String>;

	fn submit_button(&self) -> String;

	/// URL below the administration area, e.g. the options persistence endpoint
	fn admin_url(&self, path: &str) -> String;

	fn site_url(&self, path: &str) -> String;

	/// URL of a bundled static asset (images, CSS)
	fn asset_url(&self, path: &str) -> String;
}

// vim: ts=4
