use std::path::PathBuf;

/// Fatal errors that abort a scan.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The input file could not be opened.
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line could not be read or is not valid UTF-8.
    #[error("failed to read line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// Underlying I/O error kind.
    pub fn kind(&self) -> std::io::ErrorKind {
        match self {
            ScanError::Open { source, .. } | ScanError::Read { source, .. } => source.kind(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;
