//! Error taxonomy for the migration pipeline.
//!
//! Fatal errors are enums; per-file failures are recovered locally and
//! surface as [`ScanWarning`] entries on the scan outcome.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fatal errors raised by the scanner.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Root path does not exist or is not a directory. No artifacts are
    /// produced.
    #[error("Invalid root path: {path}")]
    InvalidRoot { path: PathBuf },

    /// I/O error while resolving the root.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// Create a scan error from an I/O failure with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::InvalidRoot { path },
            _ => Self::Io { path, source },
        }
    }
}

/// Per-file extraction failures. Never fatal: the file is dropped from the
/// outcome and the scan continues.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The file could not be opened for reading.
    #[error("Unreadable file: {path}")]
    Unreadable { path: PathBuf },

    /// Filesystem metadata could not be read (e.g. the file was deleted
    /// between discovery and extraction).
    #[error("Metadata error at {path}: {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExtractError {
    /// Path the extraction failed on.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Unreadable { path } => path,
            Self::Metadata { path, .. } => path,
        }
    }
}

/// Kind of scan warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningKind {
    /// File dropped because it could not be opened for reading.
    Unreadable,
    /// File dropped because its metadata could not be read.
    MetadataError,
    /// Error reading a directory during traversal.
    ReadError,
}

/// Non-fatal warning encountered during a scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanWarning {
    /// Path where the warning occurred.
    pub path: PathBuf,
    /// Human-readable message.
    pub message: String,
    /// Kind of warning.
    pub kind: WarningKind,
}

impl ScanWarning {
    /// Create a new scan warning.
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>, kind: WarningKind) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            kind,
        }
    }

    /// Warning for a file dropped during extraction.
    pub fn from_extract(err: &ExtractError) -> Self {
        let kind = match err {
            ExtractError::Unreadable { .. } => WarningKind::Unreadable,
            ExtractError::Metadata { .. } => WarningKind::MetadataError,
        };
        Self {
            path: err.path().clone(),
            message: err.to_string(),
            kind,
        }
    }

    /// Whether this warning corresponds to a file dropped from the outcome.
    pub fn is_skipped_file(&self) -> bool {
        matches!(self.kind, WarningKind::Unreadable | WarningKind::MetadataError)
    }
}
