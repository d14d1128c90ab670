// crates/clean_file_content/src/error.rs

use std::error::Error as _;
use std::io;
use std::path::{Path, PathBuf};
use std::str::Utf8Error;

/// Result type for file cleaning operations.
pub type Result<T> = std::result::Result<T, CleanError>;

/// Coarse classification of a [`CleanError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CleanErrorKind {
    NotFound,
    NotAFile,
    PermissionDenied,
    Encoding,
    Io,
}

/// Errors raised while reading, backing up or rewriting a file.
#[derive(Debug, thiserror::Error)]
pub enum CleanError {
    #[error("file does not exist: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("path is not a file: {}", .path.display())]
    NotAFile { path: PathBuf },

    #[error("permission denied: cannot {operation} {}", .path.display())]
    PermissionDenied {
        path: PathBuf,
        operation: &'static str,
        #[source]
        source: Option<io::Error>,
    },

    #[error("file is not valid UTF-8: {}", .path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: Utf8Error,
    },

    #[error("failed to {operation} {}", .path.display())]
    Io {
        path: PathBuf,
        operation: &'static str,
        #[source]
        source: io::Error,
    },
}

impl CleanError {
    /// Maps an I/O failure on `path` to the matching variant.
    pub(crate) fn from_io(path: &Path, operation: &'static str, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => CleanError::NotFound { path },
            io::ErrorKind::PermissionDenied => CleanError::PermissionDenied {
                path,
                operation,
                source: Some(source),
            },
            _ => CleanError::Io {
                path,
                operation,
                source,
            },
        }
    }

    pub fn kind(&self) -> CleanErrorKind {
        match self {
            CleanError::NotFound { .. } => CleanErrorKind::NotFound,
            CleanError::NotAFile { .. } => CleanErrorKind::NotAFile,
            CleanError::PermissionDenied { .. } => CleanErrorKind::PermissionDenied,
            CleanError::Encoding { .. } => CleanErrorKind::Encoding,
            CleanError::Io { .. } => CleanErrorKind::Io,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            CleanError::NotFound { path }
            | CleanError::NotAFile { path }
            | CleanError::PermissionDenied { path, .. }
            | CleanError::Encoding { path, .. }
            | CleanError::Io { path, .. } => path,
        }
    }

    /// The message followed by each underlying cause, `: `-separated.
    pub fn chain_message(&self) -> String {
        let mut message = self.to_string();
        let mut source = self.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }
}
