use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why no profile page could be picked for import.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("LinkedIn data directory not found: {0}")]
    MissingDataDir(PathBuf),
    #[error("no HTML files found in {0}")]
    NoHtml(PathBuf),
    #[error("source file not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to list {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid JSON in {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{0} must contain a JSON object")]
    NotAnObject(PathBuf),
    #[error("failed to encode {path}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
