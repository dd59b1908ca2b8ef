//! Option store backed by one JSON file per option, with an in-memory cache

use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::{fs, io};

use oidc_settings::error::ClResult;
use oidc_settings::option_store::OptionStore;
use oidc_settings::record::SettingsRecord;
use tracing::{debug, info};

pub struct JsonFileStore {
	dir: Option<PathBuf>,
	cache: RwLock<HashMap<String, SettingsRecord>>,
}

impl JsonFileStore {
	/// Without a directory nothing is persisted
	pub fn new(dir: Option<PathBuf>) -> ClResult<Self> {
		if let Some(dir) = &dir {
			fs::create_dir_all(dir)?;
			info!("Storing options in {}", dir.display());
		}
		Ok(Self { dir, cache: RwLock::new(HashMap::new()) })
	}

	fn option_path(dir: &Path, name: &str) -> PathBuf {
		dir.join(format!("{}.json", name))
	}
}

impl OptionStore for JsonFileStore {
	fn read_option(&self, name: &str) -> ClResult<Option<SettingsRecord>> {
		if let Some(record) = self.cache.read().get(name) {
			return Ok(Some(record.clone()));
		}
		let Some(dir) = &self.dir else {
			return Ok(None);
		};

		let data = match fs::read(Self::option_path(dir, name)) {
			Ok(data) => data,
			Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
			Err(err) => return Err(err.into()),
		};
		let record: SettingsRecord = serde_json::from_slice(&data)?;
		debug!("Loaded option {} ({} keys)", name, record.len());
		self.cache.write().insert(name.to_string(), record.clone());
		Ok(Some(record))
	}

	fn write_option(&self, name: &str, record: SettingsRecord) -> ClResult<()> {
		if let Some(dir) = &self.dir {
			fs::write(Self::option_path(dir, name), serde_json::to_vec_pretty(&record)?)?;
		}
		self.cache.write().insert(name.to_string(), record);
		Ok(())
	}
}


// vim: ts=4
