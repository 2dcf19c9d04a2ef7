//! File record type.

use std::path::PathBuf;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Metadata for a single migratable file.
///
/// Created once per scanned file and never mutated afterwards. Equality is
/// structural; a record has no identity beyond its field values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Absolute path of the file.
    pub path: PathBuf,

    /// Size in bytes, from filesystem metadata.
    pub size_bytes: u64,

    /// Lowercase extension without the leading dot. Empty when the file
    /// name contains no dot.
    pub kind: CompactString,
}

impl FileRecord {
    /// Create a new file record.
    pub fn new(path: impl Into<PathBuf>, size_bytes: u64, kind: impl Into<CompactString>) -> Self {
        Self {
            path: path.into(),
            size_bytes,
            kind: kind.into(),
        }
    }

    /// File name component of the path, lossy-decoded.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}
