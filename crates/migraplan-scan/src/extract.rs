//! Per-file metadata extraction.

use std::fs::File;
use std::path::Path;

use compact_str::CompactString;

use migraplan_core::{ExtractError, FileRecord};

/// Derive the migration type from a file name: the substring after the
/// last `.`, lowercased. A name without a dot yields an empty type.
pub(crate) fn file_kind(name: &str) -> CompactString {
    match name.rfind('.') {
        Some(idx) => name[idx + 1..].to_lowercase().into(),
        None => CompactString::default(),
    }
}

/// Build a [`FileRecord`] for a single path.
///
/// Size comes from filesystem metadata; file contents are never read. The
/// file must be openable for reading: a failed open yields
/// [`ExtractError::Unreadable`] and the caller drops the file from the
/// outcome.
pub fn extract(path: &Path) -> Result<FileRecord, ExtractError> {
    let metadata = std::fs::metadata(path).map_err(|source| ExtractError::Metadata {
        path: path.to_path_buf(),
        source,
    })?;

    File::open(path).map_err(|_| ExtractError::Unreadable {
        path: path.to_path_buf(),
    })?;

    let kind = path
        .file_name()
        .map(|name| file_kind(&name.to_string_lossy()))
        .unwrap_or_default();

    Ok(FileRecord::new(path, metadata.len(), kind))
}
