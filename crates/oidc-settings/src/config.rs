//! Settings page configuration

/// Login button shortcode, shown in the page notes
pub const LOGIN_BUTTON_SHORTCODE: &str = "[openid_connect_generic_login_button]";
/// Authentication URL shortcode, shown in the page notes
pub const AUTH_URL_SHORTCODE: &str = "[openid_connect_generic_auth_url]";

#[derive(Debug, Clone)]
pub struct SettingsPageOpts {
	pub page_title: String,
	pub menu_title: String,
	/// Capability the host requires before showing the page
	pub capability: String,
	pub page_slug: String,
	/// Name of the stored option; also the form field prefix
	pub option_name: String,
	pub option_group: String,
	/// Logo asset path, resolved through the host
	pub logo_asset: Option<String>,
	/// Default redirect route, below the administration area
	pub redirect_route: String,
	/// Redirect route used when `alternate_redirect_uri` is enabled, below the site root
	pub alternate_redirect_route: String,
}

impl Default for SettingsPageOpts {
	fn default() -> Self {
		Self {
			page_title: "OpenID Connect - Generic Client".into(),
			menu_title: "OpenID Connect Client".into(),
			capability: "manage_options".into(),
			page_slug: "openid-connect-generic-settings".into(),
			option_name: "openid_connect_generic_settings".into(),
			option_group: "openid-connect-generic-settings-group".into(),
			logo_asset: Some("images/openid-connect-logo.svg".into()),
			redirect_route: "admin-ajax.php?action=openid-connect-authorize".into(),
			alternate_redirect_route: "openid-connect-authorize".into(),
		}
	}
}

// vim: ts=4
