//! Decoding of submitted settings forms

use crate::prelude::*;

/// Extract `option_name[key]=value` pairs from an urlencoded form body.
/// Later occurrences win, so a checked checkbox overrides its hidden input.
pub fn raw_input_from_form(body: &str, option_name: &str) -> ClResult<RawInput> {
	let pairs: Vec<(String, String)> = serde_urlencoded::from_str(body).map_err(|e| {
		debug!("Malformed settings form body: {}", e);
		Error::Parse
	})?;

	let mut raw = RawInput::new();
	for (name, value) in pairs {
		let key = name
			.strip_prefix(option_name)
			.and_then(|rest| rest.strip_prefix('['))
			.and_then(|rest| rest.strip_suffix(']'));
		if let Some(key) = key {
			raw.insert(key.to_string(), serde_json::Value::String(value));
		}
	}
	Ok(raw)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_extracts_prefixed_keys() {
		let body = "option_page=group&oidc%5Bclient_id%5D=abc&oidc%5Bscope%5D=openid+email";
		let raw = raw_input_from_form(body, "oidc").unwrap();
		assert_eq!(raw.len(), 2);
		assert_eq!(raw["client_id"], "abc");
		assert_eq!(raw["scope"], "openid email");
	}

	#[test]
	fn test_checkbox_overrides_hidden_input() {
		let body = "oidc[enable_logging]=0&oidc[enable_logging]=1&oidc[no_sslverify]=0";
		let raw = raw_input_from_form(body, "oidc").unwrap();
		assert_eq!(raw["enable_logging"], "1");
		assert_eq!(raw["no_sslverify"], "0");
	}
}

// vim: ts=4
