//! JSON Schema loading and per-record validation for jsonlcheck.
//!
//! Load a draft 2020-12 schema once, compile it, then ask it for every
//! violation a record has, each located by its structural path.
//!
//! The schema engine sits behind [`RecordValidator`], so callers scanning
//! records never depend on the `jsonschema` crate directly.

pub mod config;
pub mod error;
pub mod loader;
pub mod path;
pub mod strict;
pub mod validator;

pub use config::SchemaConfig;
pub use error::{Result, SchemaError};
pub use loader::load_schema;
pub use path::{InstancePath, PathSegment};
pub use validator::{sort_violations, RecordValidator, SchemaValidator, Violation};
