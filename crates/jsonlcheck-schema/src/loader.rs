use std::io::Read;
use std::path::Path;

use serde_json::Value;

use crate::config::SchemaConfig;
use crate::error::{Result, SchemaError};

/// Read and parse a schema document from `path`.
///
/// The file must be UTF-8 JSON no larger than `config.max_schema_file_size`.
pub fn load_schema(path: &Path, config: &SchemaConfig) -> Result<Value> {
    let io_err = |source| SchemaError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = std::fs::File::open(path).map_err(io_err)?;
    let metadata = file.metadata().map_err(io_err)?;
    let max_bytes = config.max_schema_file_size;

    if metadata.len() > max_bytes as u64 {
        return Err(SchemaError::TooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max: max_bytes,
        });
    }

    // The file may grow between stat and read.
    let read_limit = u64::try_from(max_bytes.saturating_add(1)).unwrap_or(u64::MAX);
    let mut content = String::new();
    file.take(read_limit)
        .read_to_string(&mut content)
        .map_err(io_err)?;
    if content.len() > max_bytes {
        return Err(SchemaError::TooLarge {
            path: path.to_path_buf(),
            size: content.len() as u64,
            max: max_bytes,
        });
    }

    let schema: Value = serde_json::from_str(&content)?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "schema loaded");
    Ok(schema)
}
