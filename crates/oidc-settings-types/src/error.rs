//! Error type shared by all settings crates

use std::fmt;

pub type ClResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	NotFound,
	Parse,
	/// Malformed schema or page configuration, detected at build time
	ConfigError(String),
	/// A value or key rejected at a typed boundary
	ValidationError(String),
	Internal(String),

	// externals
	Io(std::io::Error),
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Error::NotFound => write!(f, "not found"),
			Error::Parse => write!(f, "parse error"),
			Error::ConfigError(msg) => write!(f, "configuration error: {}", msg),
			Error::ValidationError(msg) => write!(f, "validation error: {}", msg),
			Error::Internal(msg) => write!(f, "internal error: {}", msg),
			Error::Io(e) => write!(f, "io error: {}", e),
		}
	}
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		tracing::debug!("json error: {}", err);
		Self::Parse
	}
}

impl From<regex::Error> for Error {
	fn from(err: regex::Error) -> Self {
		Self::Internal(format!("regex compilation failed: {}", err))
	}
}

impl From<handlebars::TemplateError> for Error {
	fn from(err: handlebars::TemplateError) -> Self {
		Self::ConfigError(format!("template error: {}", err))
	}
}

impl From<handlebars::RenderError> for Error {
	fn from(err: handlebars::RenderError) -> Self {
		Self::Internal(format!("render error: {}", err))
	}
}


// vim: ts=4
