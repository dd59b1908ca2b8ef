//! Persistence adapter for the canonical settings record

use crate::prelude::*;
use crate::record::SettingsRecord;

pub trait OptionStore: Send + Sync {
	/// Read a named option. Returns None if it was never saved.
	fn read_option(&self, name: &str) -> ClResult<Option<SettingsRecord>>;

	/// Replace a named option as a whole
	fn write_option(&self, name: &str, record: SettingsRecord) -> ClResult<()>;
}

// vim: ts=4
