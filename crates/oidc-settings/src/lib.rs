//! Settings page for an OpenID Connect client plugin embedded in a host
//! content-management application.
//!
//! One declarative field schema drives three things:
//!
//! - registration of the page, its sections and fields with the host
//! - rendering of every field with its current value
//! - sanitization of submitted values into the stored settings record
//!
//! The host (menus, forms, persistence, logging, translation) is reached only
//! through the traits in [`host_adapter`], [`option_store`], [`log_adapter`]
//! and [`translate`].

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

// Re-export shared types and adapter traits from oidc-settings-types
pub use oidc_settings_types::error;
pub use oidc_settings_types::field;
pub use oidc_settings_types::host_adapter;
pub use oidc_settings_types::log_adapter;
pub use oidc_settings_types::option_store;
pub use oidc_settings_types::record;
pub use oidc_settings_types::translate;
pub use oidc_settings_types::value;

pub use oidc_settings_core::overrides;
pub use oidc_settings_core::render;
pub use oidc_settings_core::sanitize;
pub use oidc_settings_core::schema;

pub mod config;
pub mod page;
pub mod prelude;

pub use crate::config::SettingsPageOpts;
pub use crate::page::{SettingsPage, SettingsPageBuilder};

// vim: ts=4
