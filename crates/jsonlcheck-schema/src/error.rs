use std::path::PathBuf;

/// Errors that can occur while loading or compiling a schema.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The schema file could not be opened or read.
    #[error("failed to load schema {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The schema file exceeds the configured size limit.
    #[error("schema file too large ({size} bytes, max {max}): {}", path.display())]
    TooLarge {
        path: PathBuf,
        size: u64,
        max: usize,
    },

    /// The schema document is not valid JSON.
    #[error("schema is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The schema could not be compiled.
    #[error("failed to compile schema: {0}")]
    CompileFailed(String),
}

pub type Result<T> = std::result::Result<T, SchemaError>;
