use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Alias for `Result<T, CatalogError>`.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur when loading the character catalog.
///
/// All of these surface to the player as "no characters available"; the
/// variants exist so operators can tell a missing file from a corrupt one.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog source could not be read at all.
    #[error("catalog unavailable at {path}: {source}")]
    Unavailable {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The catalog source was readable but not parseable.
    #[error("catalog at {path} is malformed: {source}")]
    Malformed {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },

    /// A record has a blank name.
    #[error("catalog record {index} has a blank name")]
    BlankName {
        /// Zero-based index of the offending record.
        index: usize,
    },
}
