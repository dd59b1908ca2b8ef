//! Settings engine core: field schema, extension hooks, deployment overrides,
//! the allow-list sanitizer and the renderer dispatch.
//!
//! Everything here is synchronous and request-scoped. The schema is built
//! once, frozen, and shared read-only afterwards.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod overrides;
pub mod prelude;
pub mod render;
pub mod sanitize;
pub mod schema;

pub use overrides::DeploymentOverrides;
pub use render::Renderer;
pub use sanitize::Sanitizer;
pub use schema::{FieldRegistry, FieldSchema, SchemaHook};

// vim: ts=4
