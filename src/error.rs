//! Error types for taskline
//!
//! Exit codes:
//! - 0: Success
//! - 2: User error (bad flags, bad config)
//! - 4: Operation failed (I/O fault on the session streams)
//!
//! Errors raised while handling a session command are never fatal: the
//! session renders them as one-line notifications and keeps reading. Only
//! startup failures and faults on the session's own reader/writer reach
//! `main`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the taskline CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const USER_ERROR: i32 = 2;
    pub const OPERATION_FAILED: i32 = 4;
}

/// Main error type for taskline operations
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed or missing command payload (non-integer position,
    /// missing marker token, absent argument).
    #[error("Incorrect formatting: {0}")]
    InvalidFormat(String),

    /// Position reference outside the current collection bounds.
    #[error("No task at position {0}")]
    TaskNotFound(String),

    /// Keyword outside the fixed command vocabulary.
    #[error("Not a valid command: {0}")]
    UnknownCommand(String),

    /// Persisted line whose payload cannot be decoded back into a task.
    #[error("Cannot decode task line: {0}")]
    Decode(String),

    /// The tasks file could not be opened (load) or created (save).
    #[error("Cannot open {path}: {source}")]
    FileOpen { path: PathBuf, source: io::Error },

    /// The tasks file was opened but writing to it failed.
    #[error("Cannot write {path}: {source}")]
    FileWrite { path: PathBuf, source: io::Error },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidFormat(_)
            | Error::TaskNotFound(_)
            | Error::UnknownCommand(_)
            | Error::InvalidConfig(_) => exit_codes::USER_ERROR,

            Error::Decode(_)
            | Error::FileOpen { .. }
            | Error::FileWrite { .. }
            | Error::Io(_) => exit_codes::OPERATION_FAILED,
        }
    }
}

/// Result type alias for taskline operations
pub type Result<T> = std::result::Result<T, Error>;
