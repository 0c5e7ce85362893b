//! Error types for FolderKV
//!
//! Provides a unified error type for all operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using FolderKvError
pub type Result<T> = std::result::Result<T, FolderKvError>;

/// Unified error type for FolderKV operations
#[derive(Debug, Error)]
pub enum FolderKvError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    /// A file backend primitive failed on a specific path
    #[error("{operation} failed for {}: {source}", .path.display())]
    Backend {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    // -------------------------------------------------------------------------
    // Key Encoding Errors
    // -------------------------------------------------------------------------
    #[error("Not a store entry name: {0}")]
    InvalidFileName(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl FolderKvError {
    /// Wrap an I/O error from a backend primitive with its path
    pub fn backend(operation: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Backend {
            operation,
            path: path.into(),
            source,
        }
    }

    /// True if the underlying cause is a missing file or directory
    pub fn is_not_found(&self) -> bool {
        self.io_kind() == Some(io::ErrorKind::NotFound)
    }

    /// The `io::ErrorKind` of the underlying cause, if any
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::Backend { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}
