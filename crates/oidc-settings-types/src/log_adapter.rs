//! Logging subsystem adapter
//!
//! Login attempt logs are kept by an external collaborator. The settings page
//! only embeds its table when logging is enabled.

use crate::prelude::*;

pub trait LogProvider: Send + Sync {
	/// Markup of the log table shown below the settings form
	fn render_logs_table(&self) -> ClResult<String>;
}

/// Log provider for deployments without a logging subsystem
#[derive(Debug, Default)]
pub struct NoLogs;

impl LogProvider for NoLogs {
	fn render_logs_table(&self) -> ClResult<String> {
		Ok(String::new())
	}
}

// vim: ts=4
