pub use oidc_settings_types::error::{ClResult, Error};
pub use oidc_settings_types::field::{FieldDefinition, FieldType, Section};
pub use oidc_settings_types::record::{RawInput, SettingsRecord};
pub use oidc_settings_types::value::SettingValue;

pub use tracing::{debug, error, info, warn};

// vim: ts=4
