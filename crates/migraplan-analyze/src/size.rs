//! Size aggregation.

use migraplan_core::FileRecord;

/// Total size in bytes over a record sequence. Empty input yields 0.
///
/// This is the only total-size implementation in the workspace; every
/// reported byte total goes through it.
pub fn total_size(records: &[FileRecord]) -> u64 {
    records.iter().map(|r| r.size_bytes).sum()
}
