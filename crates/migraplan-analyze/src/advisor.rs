//! Oversized-file advisories.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

use migraplan_core::{DEFAULT_MAX_FILE_SIZE_BYTES, FileRecord, MigrationConfig};

/// A file flagged for operator review before migration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    /// Path of the oversized file.
    pub path: PathBuf,
    /// Its size in bytes.
    pub size_bytes: u64,
}

/// Results from an advisory pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisoryReport {
    /// One entry per record exceeding the threshold, in input order.
    pub advisories: Vec<Advisory>,
    /// Number of records examined.
    pub files_checked: u64,
    /// Threshold the records were compared against.
    pub threshold_bytes: u64,
}

impl AdvisoryReport {
    /// Whether any file was flagged.
    pub fn has_advisories(&self) -> bool {
        !self.advisories.is_empty()
    }

    /// Number of flagged files.
    pub fn count(&self) -> usize {
        self.advisories.len()
    }
}

/// Scans records for entries exceeding a size threshold.
pub struct SizeAdvisor {
    threshold_bytes: u64,
}

impl SizeAdvisor {
    /// Advisor using the default 250 MiB threshold.
    pub fn new() -> Self {
        Self {
            threshold_bytes: DEFAULT_MAX_FILE_SIZE_BYTES,
        }
    }

    /// Advisor with an explicit threshold in bytes.
    pub fn with_threshold(threshold_bytes: u64) -> Self {
        Self { threshold_bytes }
    }

    /// Advisor using the threshold from a migration config.
    pub fn from_config(config: &MigrationConfig) -> Self {
        Self::with_threshold(config.max_file_size_bytes)
    }

    /// Emit an advisory for every record strictly larger than the
    /// threshold. Qualifying records are always reported, never dropped.
    pub fn advise(&self, records: &[FileRecord]) -> AdvisoryReport {
        let mut advisories = Vec::new();

        for record in records {
            if record.size_bytes > self.threshold_bytes {
                warn!(
                    path = %record.path.display(),
                    size_bytes = record.size_bytes,
                    threshold_bytes = self.threshold_bytes,
                    "file exceeds migration size threshold"
                );
                advisories.push(Advisory {
                    path: record.path.clone(),
                    size_bytes: record.size_bytes,
                });
            }
        }

        AdvisoryReport {
            advisories,
            files_checked: records.len() as u64,
            threshold_bytes: self.threshold_bytes,
        }
    }
}

impl Default for SizeAdvisor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(path: &str, size: u64) -> FileRecord {
        FileRecord::new(path, size, "pdf")
    }

    #[test]
    fn test_flags_files_over_threshold() {
        let records = vec![
            record("/ok.pdf", 100),
            record("/grande.pdf", 1001),
            record("/peor.pdf", 5000),
        ];

        let report = SizeAdvisor::with_threshold(1000).advise(&records);

        assert!(report.has_advisories());
        assert_eq!(report.count(), 2);
        assert_eq!(report.advisories[0].path, PathBuf::from("/grande.pdf"));
        assert_eq!(report.advisories[1].size_bytes, 5000);
        assert_eq!(report.files_checked, 3);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let records = vec![record("/justo.pdf", 1000)];
        let report = SizeAdvisor::with_threshold(1000).advise(&records);
        assert!(!report.has_advisories());
    }

    #[test]
    fn test_empty_records_yield_empty_report() {
        let report = SizeAdvisor::new().advise(&[]);
        assert!(!report.has_advisories());
        assert_eq!(report.files_checked, 0);
    }

    #[test]
    fn test_default_threshold_matches_config_default() {
        let from_config = SizeAdvisor::from_config(&MigrationConfig::default());
        let report = from_config.advise(&[record("/a.pdf", DEFAULT_MAX_FILE_SIZE_BYTES + 1)]);
        assert_eq!(report.threshold_bytes, DEFAULT_MAX_FILE_SIZE_BYTES);
        assert_eq!(report.count(), 1);
    }
}
