//! String translation adapter

/// Opaque `translate(key) -> string` lookup. Keys are the English source strings.
pub trait Translator: Send + Sync {
	fn translate(&self, key: &str) -> String;
}

/// Returns every key unchanged
#[derive(Debug, Default, Clone, Copy)]
pub struct Untranslated;

impl Translator for Untranslated {
	fn translate(&self, key: &str) -> String {
		key.to_string()
	}
}

// vim: ts=4
