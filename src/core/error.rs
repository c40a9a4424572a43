//! Error taxonomy
//!
//! Every anticipated failure is one of these types. None of them aborts a run
//! on its own: the pipeline reports them and decides whether to continue.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Problems with option values
#[derive(Debug, Error)]
pub enum OptionError {
    #[error("Invalid value for -max parameter: '{value}'. Using default value of {default}.")]
    InvalidMax { value: String, default: usize },
}

impl OptionError {
    pub fn code(&self) -> &'static str {
        match self {
            OptionError::InvalidMax { .. } => "INVALID_MAX",
        }
    }
}

/// A pattern that contributed no files
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("File does not exist: {}", .0.display())]
    FileMissing(PathBuf),

    #[error("Directory does not exist: {}", .0.display())]
    DirectoryMissing(PathBuf),

    #[error("Error expanding pattern '{pattern}': {message}")]
    Expand { pattern: String, message: String },
}

impl ResolveError {
    pub fn code(&self) -> &'static str {
        match self {
            ResolveError::FileMissing(_) => "FILE_MISSING",
            ResolveError::DirectoryMissing(_) => "DIRECTORY_MISSING",
            ResolveError::Expand { .. } => "PATTERN_ERROR",
        }
    }
}

/// A file that could not be read
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("File not found: {}, Error: {source}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Access denied to file: {}, Error: {source}", .path.display())]
    AccessDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to process file: {}, Error: {source}", .path.display())]
    Other {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ReadError {
    /// Classify an I/O error raised while reading `path`
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => ReadError::NotFound { path, source },
            io::ErrorKind::PermissionDenied => ReadError::AccessDenied { path, source },
            _ => ReadError::Other { path, source },
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ReadError::NotFound { .. } => "FILE_NOT_FOUND",
            ReadError::AccessDenied { .. } => "ACCESS_DENIED",
            ReadError::Other { .. } => "READ_FAILED",
        }
    }
}

#[derive(Debug, Error)]
#[error("Failed to write output file {}: {source}", .path.display())]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Failed to open the output file: could not start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to open the output file: '{program}' exited with {status}")]
    Status { program: String, status: String },
}

impl LaunchError {
    pub fn code(&self) -> &'static str {
        "LAUNCH_FAILED"
    }
}
