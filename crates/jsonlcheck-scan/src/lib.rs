//! Single-pass JSON-Lines scanning.
//!
//! Every non-blank line is decoded as a standalone JSON document and handed
//! to a [`RecordValidator`](jsonlcheck_schema::RecordValidator). Problems are
//! collected per line; nothing short of an I/O failure stops the scan.

pub mod error;
pub mod reader;
pub mod report;
pub mod scan;

pub use error::{Result, ScanError};
pub use reader::{JsonLines, Line};
pub use report::{write_text_report, ALL_GOOD};
pub use scan::{scan, scan_file, LineReport, ScanReport, MALFORMED_PREFIX};
