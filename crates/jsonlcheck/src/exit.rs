use std::fmt;
use std::io;

use jsonlcheck_scan::ScanError;
use jsonlcheck_schema::SchemaError;

// Exit codes. NOT_FOUND follows sysexits EX_NOINPUT.
pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const NOT_FOUND: i32 = 66;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

fn io_code(kind: io::ErrorKind) -> i32 {
    match kind {
        io::ErrorKind::NotFound => NOT_FOUND,
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::InvalidData => DATA_INVALID,
        _ => INTERNAL,
    }
}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    CliError::new(io_code(err.kind()), format!("{context}: {err}"))
}

pub fn schema_error(err: SchemaError) -> CliError {
    let code = match &err {
        SchemaError::Io { source, .. } => io_code(source.kind()),
        SchemaError::TooLarge { .. }
        | SchemaError::InvalidJson(_)
        | SchemaError::CompileFailed(_) => DATA_INVALID,
    };
    CliError::new(code, err.to_string())
}

pub fn scan_error(err: ScanError) -> CliError {
    CliError::new(io_code(err.kind()), err.to_string())
}
