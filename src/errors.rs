use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::path_gen::RenamePair;

/// Custom error type for the rnr application
#[derive(Debug)]
pub enum Error {
    /// The root path does not exist or is not a directory
    InvalidRoot { path: PathBuf, detail: String },
    /// One or more planned destinations collide; the whole batch is refused
    Conflict { conflicts: Vec<RenamePair> },
    /// A single rename call failed
    Rename {
        source: io::Error,
        from: PathBuf,
        to: PathBuf,
    },
    /// Error related to other file operations (reading directories, metadata)
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// Error when a path has no final component
    InvalidFilename { path: PathBuf },
    /// Error when the search string is empty
    EmptyPattern,
    /// Generic error with a message
    Generic { message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidRoot { path, detail } => {
                write!(f, "Path '{}' {}", path.display(), detail)
            }
            Error::Conflict { conflicts } => {
                write!(f, "Found {} naming conflicts", conflicts.len())
            }
            Error::Rename { source, from, to } => {
                write!(
                    f,
                    "Failed to rename {} to {}: {}",
                    from.display(),
                    to.display(),
                    source
                )
            }
            Error::FileOperation {
                source,
                path,
                operation,
            } => {
                write!(f, "Failed to {} {}: {}", operation, path.display(), source)
            }
            Error::InvalidFilename { path } => {
                write!(f, "Path has no filename: {}", path.display())
            }
            Error::EmptyPattern => {
                write!(f, "The search string must not be empty")
            }
            Error::Generic { message } => {
                write!(f, "{message}")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Rename { source, .. } => Some(source),
            Error::FileOperation { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Custom Result type for the rnr application
///
/// Every pipeline stage returns this type so that only the binary decides
/// how an error maps onto an exit code.
///
/// # Examples
/// ```
/// use rnr::prelude::{Result, generic_error};
///
/// fn example_function(ok: bool) -> Result<String> {
///     if ok {
///         Ok("success".to_string())
///     } else {
///         Err(generic_error("Something went wrong"))
///     }
/// }
/// # assert!(example_function(true).is_ok());
/// # assert!(example_function(false).is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create an invalid root error
pub fn invalid_root_error(path: PathBuf, detail: &str) -> Error {
    Error::InvalidRoot {
        path,
        detail: detail.to_string(),
    }
}

/// Helper function to create a batch conflict error
pub fn conflict_error(conflicts: Vec<RenamePair>) -> Error {
    Error::Conflict { conflicts }
}

/// Helper function to create a per-file rename error
pub fn rename_error(err: io::Error, pair: &RenamePair) -> Error {
    Error::Rename {
        source: err,
        from: pair.source().to_path_buf(),
        to: pair.destination().to_path_buf(),
    }
}

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create an invalid filename error
pub fn invalid_filename_error(path: PathBuf) -> Error {
    Error::InvalidFilename { path }
}

/// Helper function to create an empty pattern error
pub fn empty_pattern_error() -> Error {
    Error::EmptyPattern
}

/// Helper function to create a generic error
pub fn generic_error(message: &str) -> Error {
    Error::Generic {
        message: message.to_string(),
    }
}
