//! Shared types, host adapter traits, and core utilities for the OpenID Connect
//! client settings engine.
//!
//! This crate holds the pieces every other crate agrees on: the field definition
//! model, the canonical settings record, the error type, and the traits through
//! which the host application (registration, persistence, logging, translation)
//! is reached.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod error;
pub mod field;
pub mod host_adapter;
pub mod log_adapter;
pub mod option_store;
pub mod prelude;
pub mod record;
pub mod translate;
pub mod value;

// vim: ts=4
