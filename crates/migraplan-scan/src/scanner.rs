//! jwalk-based parallel directory scanner.

use std::path::Path;
use std::time::Duration;

use jwalk::{Parallelism, WalkDir};
use tracing::debug;

use migraplan_core::{MigrationConfig, ScanError, ScanOutcome, ScanWarning, WarningKind};

use crate::cancel::CancelFlag;
use crate::extract::extract;

/// Recursive scanner producing the full record set for a root directory.
///
/// Excluded folders are pruned during traversal, so their whole subtree is
/// never visited. Traversal runs in parallel; the resulting records are
/// sorted by path so the order is stable across both export formats within
/// a single run.
pub struct PlanScanner {
    cancel: CancelFlag,
}

impl PlanScanner {
    /// Create a new scanner.
    pub fn new() -> Self {
        Self {
            cancel: CancelFlag::new(),
        }
    }

    /// Create a scanner driven by an externally held cancellation flag.
    pub fn with_cancel(cancel: CancelFlag) -> Self {
        Self { cancel }
    }

    /// Get a handle to this scanner's cancellation flag.
    pub fn cancel_flag(&self) -> CancelFlag {
        self.cancel.clone()
    }

    /// Scan all regular files under `root`.
    ///
    /// Fails only when the root is invalid. A file that cannot be read is
    /// dropped with a warning and the scan continues; the caller can ask
    /// the outcome for the skipped-file count.
    pub fn scan(&self, root: &Path, config: &MigrationConfig) -> Result<ScanOutcome, ScanError> {
        let root_path = root.canonicalize().map_err(|e| ScanError::io(root, e))?;
        if !root_path.is_dir() {
            return Err(ScanError::InvalidRoot { path: root_path });
        }

        let parallelism = match config.threads {
            0 => Parallelism::RayonDefaultPool {
                busy_timeout: Duration::from_millis(100),
            },
            n => Parallelism::RayonNewPool(n),
        };

        let config = config.clone();
        let walker = WalkDir::new(&root_path)
            .parallelism(parallelism)
            .skip_hidden(false)
            .follow_links(false)
            .process_read_dir(move |_depth, _dir, _state, children| {
                // Prune excluded directories so the whole subtree is skipped.
                children.retain(|entry| match entry {
                    Ok(e) => {
                        !(e.file_type.is_dir()
                            && config.is_excluded(&e.file_name.to_string_lossy()))
                    }
                    Err(_) => true,
                });
            });

        let mut records = Vec::new();
        let mut warnings = Vec::new();
        let mut cancelled = false;

        for entry_result in walker {
            if self.cancel.is_cancelled() {
                cancelled = true;
                break;
            }

            let entry = match entry_result {
                Ok(e) => e,
                Err(err) => {
                    let path = err.path().map(|p| p.to_path_buf()).unwrap_or_default();
                    warnings.push(ScanWarning::new(path, err.to_string(), WarningKind::ReadError));
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            match extract(&path) {
                Ok(record) => records.push(record),
                Err(err) => {
                    debug!(path = %path.display(), error = %err, "dropping file from scan");
                    warnings.push(ScanWarning::from_extract(&err));
                }
            }
        }

        records.sort_by(|a, b| a.path.cmp(&b.path));

        debug!(
            files = records.len(),
            warnings = warnings.len(),
            cancelled,
            "scan finished"
        );

        Ok(ScanOutcome::new(records, warnings, cancelled))
    }
}

impl Default for PlanScanner {
    fn default() -> Self {
        Self::new()
    }
}
