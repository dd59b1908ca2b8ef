//! Settings page controller
//!
//! Registers the page, the stored option, the four sections and every schema
//! field with the host, and assembles the page when the host displays it.

use std::sync::Arc;

use oidc_settings_core::overrides::DeploymentOverrides;
use oidc_settings_core::render::{PageContext, Renderer};
use oidc_settings_core::sanitize::{Sanitizer, TextFilter, raw_input_from_form};
use oidc_settings_core::schema::{FieldSchema, SchemaHook, build_schema};
use oidc_settings_types::field::FieldMap;
use oidc_settings_types::host_adapter::{
	FieldRegistration, HostFrontend, HostRegistrar, PageRegistration, SectionRegistration,
	SettingRegistration,
};
use oidc_settings_types::log_adapter::{LogProvider, NoLogs};
use oidc_settings_types::option_store::OptionStore;
use oidc_settings_types::translate::{Translator, Untranslated};

use crate::config::{AUTH_URL_SHORTCODE, LOGIN_BUTTON_SHORTCODE, SettingsPageOpts};
use crate::prelude::*;

pub struct SettingsPage {
	opts: SettingsPageOpts,
	schema: Arc<FieldSchema>,
	renderer: Arc<Renderer>,
	sanitizer: Arc<Sanitizer>,
	overrides: Arc<DeploymentOverrides>,
	translator: Arc<dyn Translator>,
	store: Arc<dyn OptionStore>,
	logs: Arc<dyn LogProvider>,
}

pub struct SettingsPageBuilder {
	opts: SettingsPageOpts,
	translator: Option<Arc<dyn Translator>>,
	overrides: Option<DeploymentOverrides>,
	hooks: Vec<(String, SchemaHook)>,
	store: Option<Arc<dyn OptionStore>>,
	logs: Option<Arc<dyn LogProvider>>,
}

impl SettingsPageBuilder {
	pub fn new(opts: SettingsPageOpts) -> Self {
		Self { opts, translator: None, overrides: None, hooks: Vec::new(), store: None, logs: None }
	}

	pub fn translator(mut self, translator: Arc<dyn Translator>) -> Self {
		self.translator = Some(translator);
		self
	}

	/// Deployment overrides; read from the environment when not set
	pub fn overrides(mut self, overrides: DeploymentOverrides) -> Self {
		self.overrides = Some(overrides);
		self
	}

	/// Add an extension hook, applied once when the schema is built
	pub fn hook<F>(mut self, name: impl Into<String>, hook: F) -> Self
	where
		F: Fn(FieldMap) -> ClResult<FieldMap> + Send + Sync + 'static,
	{
		let hook: SchemaHook = Box::new(hook);
		self.hooks.push((name.into(), hook));
		self
	}

	/// Persistence of the settings record (required)
	pub fn store(mut self, store: Arc<dyn OptionStore>) -> Self {
		self.store = Some(store);
		self
	}

	pub fn logs(mut self, logs: Arc<dyn LogProvider>) -> Self {
		self.logs = Some(logs);
		self
	}

	/// Build the schema and everything derived from it. Malformed field
	/// definitions, including ones produced by hooks, fail here.
	pub fn build(self) -> ClResult<Arc<SettingsPage>> {
		let store =
			self.store.ok_or_else(|| Error::ConfigError("Option store is required".into()))?;
		let translator = self.translator.unwrap_or_else(|| Arc::new(Untranslated));
		let overrides = Arc::new(self.overrides.unwrap_or_else(DeploymentOverrides::from_env));

		let schema = Arc::new(build_schema(
			&self.opts.option_name,
			translator.as_ref(),
			&overrides,
			self.hooks,
		)?);
		let filter = Arc::new(TextFilter::new()?);
		let renderer = Arc::new(Renderer::new(filter.clone(), translator.as_ref())?);
		let sanitizer = Arc::new(Sanitizer::new(schema.clone(), filter));

		Ok(Arc::new(SettingsPage {
			opts: self.opts,
			schema,
			renderer,
			sanitizer,
			overrides,
			translator,
			store,
			logs: self.logs.unwrap_or_else(|| Arc::new(NoLogs)),
		}))
	}
}

impl SettingsPage {
	pub fn builder(opts: SettingsPageOpts) -> SettingsPageBuilder {
		SettingsPageBuilder::new(opts)
	}

	pub fn opts(&self) -> &SettingsPageOpts {
		&self.opts
	}

	pub fn schema(&self) -> &Arc<FieldSchema> {
		&self.schema
	}

	pub fn renderer(&self) -> &Arc<Renderer> {
		&self.renderer
	}

	/// Register the page, the stored option, and all sections and fields
	pub fn register_all(self: &Arc<Self>, host: &mut dyn HostRegistrar) -> ClResult<()> {
		self.register_page(host)?;
		self.register_setting(host)?;
		self.register_sections(host)?;
		info!(
			"Settings page '{}' registered with {} fields",
			self.opts.page_slug,
			self.schema.len()
		);
		Ok(())
	}

	pub fn register_page(self: &Arc<Self>, host: &mut dyn HostRegistrar) -> ClResult<()> {
		let page = Arc::clone(self);
		debug!("Registering settings page: {}", self.opts.page_slug);
		host.register_page(PageRegistration {
			title: self.translator.translate(&self.opts.page_title),
			menu_title: self.translator.translate(&self.opts.menu_title),
			capability: self.opts.capability.clone(),
			slug: self.opts.page_slug.clone(),
			render: Arc::new(move |frontend: &dyn HostFrontend| page.render_page(frontend)),
		})
	}

	/// Bind the stored option to the sanitizer
	pub fn register_setting(&self, host: &mut dyn HostRegistrar) -> ClResult<()> {
		let sanitizer = Arc::clone(&self.sanitizer);
		debug!("Registering setting: {}", self.opts.option_name);
		host.register_setting(SettingRegistration {
			group: self.opts.option_group.clone(),
			option_name: self.opts.option_name.clone(),
			sanitize: Arc::new(move |raw: &RawInput| sanitizer.sanitize(raw)),
		})
	}

	/// Register the four sections, then every field under its section.
	///
	/// Field callbacks receive the snapshot from [`Self::current_settings`],
	/// where every schema key is present (default or null), so unset fields
	/// render as empty.
	pub fn register_sections(&self, host: &mut dyn HostRegistrar) -> ClResult<()> {
		for section in Section::ALL {
			let renderer = Arc::clone(&self.renderer);
			let text = self.translator.translate(section.description());
			debug!("Registering section: {}", section);
			host.register_section(SectionRegistration {
				id: section.id().to_string(),
				title: self.translator.translate(section.title()),
				description: Arc::new(move || renderer.render_section_description(&text)),
				page_slug: self.opts.page_slug.clone(),
			})?;
		}

		for def in self.schema.iter() {
			let renderer = Arc::clone(&self.renderer);
			debug!("Registering field: {} ({})", def.key(), def.field_type);
			host.register_field(FieldRegistration {
				key: def.key().to_string(),
				title: def.title.clone(),
				render: Arc::new(move |def: &FieldDefinition, record: &SettingsRecord| {
					renderer.render(def, record.value(def.key()))
				}),
				page_slug: self.opts.page_slug.clone(),
				section_id: def.section.id().to_string(),
				field: def.clone(),
			})?;
		}
		Ok(())
	}

	/// Current settings snapshot: stored record, schema defaults for missing
	/// keys, deployment overrides on top
	pub fn current_settings(&self) -> ClResult<SettingsRecord> {
		let stored = self.store.read_option(&self.opts.option_name)?.unwrap_or_default();
		let mut record = self.schema.with_defaults(&stored);
		self.overrides.apply(&self.schema, &mut record);
		Ok(record)
	}

	pub fn sanitize(&self, raw: &RawInput) -> SettingsRecord {
		self.sanitizer.sanitize(raw)
	}

	/// Sanitize a submission and replace the stored record with the result
	pub fn save(&self, raw: &RawInput) -> ClResult<SettingsRecord> {
		let record = self.sanitizer.sanitize(raw);
		self.store.write_option(&self.opts.option_name, record.clone())?;
		info!("Settings '{}' saved ({} keys)", self.opts.option_name, record.len());
		Ok(record)
	}

	/// Save from an urlencoded form body
	pub fn save_form(&self, body: &str) -> ClResult<SettingsRecord> {
		let raw = raw_input_from_form(body, &self.opts.option_name)?;
		self.save(&raw)
	}

	/// Redirect URI to configure at the identity provider
	pub fn redirect_uri(&self, host: &dyn HostFrontend, record: &SettingsRecord) -> String {
		if record.flag("alternate_redirect_uri") {
			host.site_url(&self.opts.alternate_redirect_route)
		} else {
			host.admin_url(&self.opts.redirect_route)
		}
	}

	pub fn is_logging_enabled(&self, record: &SettingsRecord) -> bool {
		record.flag("enable_logging")
	}

	/// Full settings page markup
	pub fn render_page(&self, host: &dyn HostFrontend) -> ClResult<String> {
		let record = self.current_settings()?;
		let t = |s: &str| self.translator.translate(s);

		let show_logs = self.is_logging_enabled(&record);
		let logs_table = if show_logs { self.logs.render_logs_table()? } else { String::new() };

		let ctx = PageContext {
			title: t(&self.opts.page_title),
			logo_url: self.opts.logo_asset.as_deref().map(|a| host.asset_url(a)).unwrap_or_default(),
			form_action: host.admin_url("options.php"),
			settings_fields: host.settings_fields(&self.opts.option_group),
			sections: host.render_sections(&self.opts.page_slug, &record)?,
			submit_button: host.submit_button(),
			notes_label: t("Notes"),
			redirect_uri_label: t("Redirect URI"),
			redirect_uri: self.redirect_uri(host, &record),
			login_button_label: t("Login Button Shortcode"),
			login_button_shortcode: LOGIN_BUTTON_SHORTCODE.to_string(),
			auth_url_label: t("Authentication URL Shortcode"),
			auth_url_shortcode: AUTH_URL_SHORTCODE.to_string(),
			show_logs,
			logs_label: t("Logs"),
			logs_table,
		};

		debug!("Rendering settings page '{}'", self.opts.page_slug);
		self.renderer.render_page(&ctx)
	}
}

// vim: ts=4
