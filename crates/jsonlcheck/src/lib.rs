//! Validate JSON-Lines files record by record against a JSON Schema.
//!
//! # Crate Structure
//!
//! - [`schema`] — Schema loading, draft 2020-12 compilation, structural paths
//! - [`scan`] — Line-by-line scanning and the text report

/// Re-export schema types.
pub mod schema {
    pub use jsonlcheck_schema::*;
}

/// Re-export scan types.
pub mod scan {
    pub use jsonlcheck_scan::*;
}
