//! Canonical OpenID Connect client fields
//!
//! Registration order is display order within each section and the order of
//! the stored record.

use oidc_settings_types::translate::Translator;

use super::registry::FieldRegistry;
use crate::prelude::*;

/// Keys of the canonical fields, in schema order
pub const CANONICAL_KEYS: [&str; 25] = [
	"login_type",
	"client_id",
	"client_secret",
	"scope",
	"endpoint_login",
	"endpoint_userinfo",
	"endpoint_token",
	"acr_values",
	"identity_key",
	"no_sslverify",
	"http_request_timeout",
	"enforce_privacy",
	"alternate_redirect_uri",
	"nickname_key",
	"email_format",
	"displayname_format",
	"identify_with_username",
	"state_time_limit",
	"token_refresh_enable",
	"link_existing_users",
	"create_if_does_not_exist",
	"redirect_user_back",
	"redirect_on_logout",
	"enable_logging",
	"log_limit",
];

/// Register all canonical fields
pub fn register_fields(registry: &mut FieldRegistry, translator: &dyn Translator) -> ClResult<()> {
	let t = |s: &str| translator.translate(s);

	// Client settings

	registry.register(
		"login_type",
		FieldDefinition::builder()
			.title(t("Login Type"))
			.description(t("Select how the client (login form) should provide login options."))
			.field_type(FieldType::Select)
			.option("button", t("OpenID Connect button on login form"))
			.option("auto", t("Auto Login - SSO"))
			.section(Section::ClientSettings)
			.default("button")
			.build()?,
	)?;

	registry.register(
		"client_id",
		FieldDefinition::builder()
			.title(t("Client ID"))
			.description(t(
				"The ID this client will be recognized as when connecting the to Identity provider server.",
			))
			.example("my-wordpress-client-id")
			.field_type(FieldType::Text)
			.section(Section::ClientSettings)
			.build()?,
	)?;

	registry.register(
		"client_secret",
		FieldDefinition::builder()
			.title(t("Client Secret Key"))
			.description(t(
				"Arbitrary secret key the server expects from this client. Can be anything, but should be very unique.",
			))
			.field_type(FieldType::Text)
			.section(Section::ClientSettings)
			.build()?,
	)?;

	registry.register(
		"scope",
		FieldDefinition::builder()
			.title(t("OpenID Scope"))
			.description(t("Space separated list of scopes this client should access."))
			.example("email profile openid offline_access")
			.field_type(FieldType::Text)
			.section(Section::ClientSettings)
			.build()?,
	)?;

	registry.register(
		"endpoint_login",
		FieldDefinition::builder()
			.title(t("Login Endpoint URL"))
			.description(t("Identify provider authorization endpoint."))
			.example("https://example.com/oauth2/authorize")
			.field_type(FieldType::Text)
			.section(Section::ClientSettings)
			.build()?,
	)?;

	registry.register(
		"endpoint_userinfo",
		FieldDefinition::builder()
			.title(t("Userinfo Endpoint URL"))
			.description(t("Identify provider User information endpoint."))
			.example("https://example.com/oauth2/UserInfo")
			.field_type(FieldType::Text)
			.section(Section::ClientSettings)
			.build()?,
	)?;

	registry.register(
		"endpoint_token",
		FieldDefinition::builder()
			.title(t("Token Validation Endpoint URL"))
			.description(t("Identify provider token endpoint."))
			.example("https://example.com/oauth2/token")
			.field_type(FieldType::Text)
			.section(Section::ClientSettings)
			.build()?,
	)?;

	registry.register(
		"acr_values",
		FieldDefinition::builder()
			.title(t("ACR values"))
			.description(t(
				"Use a specific defined authentication contract from the IDP - optional.",
			))
			.field_type(FieldType::Text)
			.section(Section::ClientSettings)
			.build()?,
	)?;

	registry.register(
		"identity_key",
		FieldDefinition::builder()
			.title(t("Identity Key"))
			.description(t(
				"Where in the user claim array to find the user's identification data. Possibly \"sub\" or \"email\"...",
			))
			.example("preferred_username")
			.field_type(FieldType::Text)
			.section(Section::ClientSettings)
			.default("preferred_username")
			.build()?,
	)?;

	registry.register(
		"no_sslverify",
		FieldDefinition::builder()
			.title(t("Disable SSL Verify"))
			.description(format!(
				"{}<br><strong>{}</strong>",
				t("Do not require SSL verification during authorization. The OAuth extension uses curl to make the request. By default CURL will generally verify the SSL certificate to see if its valid an issued by an accepted CA. This setting disabled that verification."),
				t("Not recommended for production sites.")
			))
			.field_type(FieldType::Checkbox)
			.section(Section::ClientSettings)
			.default(SettingValue::Int(0))
			.build()?,
	)?;

	registry.register(
		"http_request_timeout",
		FieldDefinition::builder()
			.title(t("HTTP Request Timeout"))
			.description(t("Set the timeout for requests made to the IDP. Default value is 5."))
			.example("30")
			.field_type(FieldType::Number)
			.section(Section::ClientSettings)
			.default(SettingValue::Int(5))
			.build()?,
	)?;

	// Authorization settings

	registry.register(
		"enforce_privacy",
		FieldDefinition::builder()
			.title(t("Enforce Privacy"))
			.description(t("Require users be logged in to see the site."))
			.field_type(FieldType::Checkbox)
			.section(Section::AuthorizationSettings)
			.default(SettingValue::Int(0))
			.build()?,
	)?;

	registry.register(
		"alternate_redirect_uri",
		FieldDefinition::builder()
			.title(t("Alternate Redirect URI"))
			.description(t(
				"Provide an alternative redirect route. Useful if your server is causing issues with the default admin-ajax method. You must flush rewrite rules after changing this setting. This can be done by saving the Permalinks settings page.",
			))
			.field_type(FieldType::Checkbox)
			.section(Section::AuthorizationSettings)
			.default(SettingValue::Int(0))
			.build()?,
	)?;

	// Client settings, claim mapping

	registry.register(
		"nickname_key",
		FieldDefinition::builder()
			.title(t("Nickname Key"))
			.description(t(
				"Where in the user claim array to find the user's nickname. Possibly \"nickname\", \"preferred_username\" or \"name\".",
			))
			.example("preferred_username")
			.field_type(FieldType::Text)
			.section(Section::ClientSettings)
			.default("preferred_username")
			.build()?,
	)?;

	registry.register(
		"email_format",
		FieldDefinition::builder()
			.title(t("Email Formatting"))
			.description(t(
				"String from which the user's email address is built. Specify \"{email}\" as long as the user claim contains an email claim.",
			))
			.example("{email}")
			.field_type(FieldType::Text)
			.section(Section::ClientSettings)
			.default("{email}")
			.build()?,
	)?;

	registry.register(
		"displayname_format",
		FieldDefinition::builder()
			.title(t("Display Name Formatting"))
			.description(t("String from which the user's display name is built."))
			.example("{given_name} {family_name}")
			.field_type(FieldType::Text)
			.section(Section::ClientSettings)
			.build()?,
	)?;

	registry.register(
		"identify_with_username",
		FieldDefinition::builder()
			.title(t("Identify with User Name"))
			.description(t(
				"If checked, the user's identity will be determined by the user name instead of the email address.",
			))
			.field_type(FieldType::Checkbox)
			.section(Section::ClientSettings)
			.default(SettingValue::Int(0))
			.build()?,
	)?;

	registry.register(
		"state_time_limit",
		FieldDefinition::builder()
			.title(t("State time limit"))
			.description(t("State valid time in seconds. Defaults to 180"))
			.field_type(FieldType::Number)
			.section(Section::ClientSettings)
			.default(SettingValue::Int(180))
			.build()?,
	)?;

	registry.register(
		"token_refresh_enable",
		FieldDefinition::builder()
			.title(t("Enable Refresh Token"))
			.description(t(
				"If checked, support refresh tokens used to obtain access tokens from supported IDPs.",
			))
			.field_type(FieldType::Checkbox)
			.section(Section::ClientSettings)
			.default(SettingValue::Int(1))
			.build()?,
	)?;

	// User settings

	registry.register(
		"link_existing_users",
		FieldDefinition::builder()
			.title(t("Link Existing Users"))
			.description(t(
				"If a WordPress account already exists with the same identity as a newly-authenticated user over OpenID Connect, login as that user instead of generating an error.",
			))
			.field_type(FieldType::Checkbox)
			.section(Section::UserSettings)
			.default(SettingValue::Int(0))
			.build()?,
	)?;

	registry.register(
		"create_if_does_not_exist",
		FieldDefinition::builder()
			.title(t("Create user if does not exist"))
			.description(t(
				"If the user identity is not linked to an existing WordPress user, it is created. If this setting is not enabled, and if the user authenticates with an account which is not linked to an existing WordPress user, then the authentication will fail.",
			))
			.field_type(FieldType::Checkbox)
			.section(Section::UserSettings)
			.default(SettingValue::Int(1))
			.build()?,
	)?;

	registry.register(
		"redirect_user_back",
		FieldDefinition::builder()
			.title(t("Redirect Back to Origin Page"))
			.description(t(
				"After a successful OpenID Connect authentication, this will redirect the user back to the page on which they clicked the OpenID Connect login button. This will cause the login process to proceed in a traditional WordPress fashion. For example, users logging in through the default wp-login.php page would end up on the WordPress Dashboard and users logging in through the WooCommerce \"My Account\" page would end up on their account page.",
			))
			.field_type(FieldType::Checkbox)
			.section(Section::UserSettings)
			.default(SettingValue::Int(0))
			.build()?,
	)?;

	registry.register(
		"redirect_on_logout",
		FieldDefinition::builder()
			.title(t("Redirect to the login screen when session is expired"))
			.description(t(
				"When enabled, this will automatically redirect the user back to the WordPress login page if their access token has expired.",
			))
			.field_type(FieldType::Checkbox)
			.section(Section::UserSettings)
			.default(SettingValue::Int(1))
			.build()?,
	)?;

	// Log settings

	registry.register(
		"enable_logging",
		FieldDefinition::builder()
			.title(t("Enable Logging"))
			.description(t("Very simple log messages for debugging purposes."))
			.field_type(FieldType::Checkbox)
			.section(Section::LogSettings)
			.default(SettingValue::Int(0))
			.build()?,
	)?;

	registry.register(
		"log_limit",
		FieldDefinition::builder()
			.title(t("Log Limit"))
			.description(t(
				"Number of items to keep in the log. These logs are stored as an option in the database, so space is limited.",
			))
			.field_type(FieldType::Number)
			.section(Section::LogSettings)
			.default(SettingValue::Int(1000))
			.build()?,
	)?;

	Ok(())
}


// vim: ts=4
