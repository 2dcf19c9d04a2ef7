//! Supported-type classification.

use migraplan_core::{FileRecord, MigrationConfig};

/// Keep only records whose type the configuration supports.
///
/// Pure and order-preserving: the input is not mutated and surviving
/// records keep their relative order. Matching is the configuration's
/// case-insensitive [`MigrationConfig::is_supported`] predicate. An empty
/// record set or an empty supported-type set yields an empty result, not
/// an error.
pub fn filter_supported(records: &[FileRecord], config: &MigrationConfig) -> Vec<FileRecord> {
    records
        .iter()
        .filter(|r| config.is_supported(&r.kind))
        .cloned()
        .collect()
}
