use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Alias for `Result<T, EngineError>`.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while running the quiz.
///
/// Every variant is recoverable at the boundary of a single event; none
/// should terminate the hosting process. The `Display` text is written to be
/// shown to the player as-is.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The catalog has no usable entries.
    #[error("no characters available")]
    EmptyCatalog,

    /// A submitted answer key is outside the closed category set.
    ///
    /// Surfaced to the player as an internal inconsistency and logged for
    /// operators; never a crash.
    #[error("internal inconsistency: unrecognized category key \"{0}\"")]
    UnknownCategory(String),

    /// An answer or stop event arrived for a session with nothing in play.
    #[error("no challenge in play — start a new round first")]
    NoActiveChallenge,

    /// The persisted rotation state could not be read or written.
    #[error("rotation state error: {0}")]
    State(#[from] StateError),
}

/// Errors from the rotation state file.
#[derive(Debug, Error)]
pub enum StateError {
    /// The state file exists but could not be read.
    #[error("could not read state file {path}: {source}")]
    Read {
        /// Path of the state file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The state file contents did not parse.
    #[error("state file {path} is corrupt: {source}")]
    Corrupt {
        /// Path of the state file.
        path: PathBuf,
        /// Underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },

    /// The state could not be serialized.
    #[error("could not encode rotation state: {0}")]
    Encode(#[source] serde_json::Error),

    /// The state file could not be written.
    #[error("could not write state file {path}: {source}")]
    Write {
        /// Path of the state file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}
