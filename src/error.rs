use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for level document persistence.
#[derive(Debug, Error)]
pub enum LevelError {
    /// Decode input is not structurally valid JSON for a level document.
    ///
    /// Terminal for the decode call: no partial document is returned.
    /// A missing optional field is never this error; only malformed text
    /// or a wrongly typed field is.
    #[error("parsing level document: {source}")]
    Format {
        /// Underlying JSON error.
        #[from]
        source: serde_json::Error,
    },

    /// File I/O failure in the load/save helpers.
    #[error("accessing level file {path}: {source}")]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A non-JSON path was given to the file helpers.
    #[error("unsupported level file format: {0}")]
    UnsupportedFormat(String),
}
