//! Shared test support: an in-memory host, stores and fixtures

#![allow(dead_code)]

pub mod fixtures;
pub mod host;

/// Initialize a tracing subscriber writing to the test output
pub fn setup_test_logging() {
	let _ = tracing_subscriber::fmt()
		.with_test_writer()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.try_init();
}

// vim: ts=4
