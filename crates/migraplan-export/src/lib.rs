//! Plan export for migraplan.
//!
//! Serializes a migration plan into the two artifacts consumed by
//! downstream tooling: a delimited tabular file and a structured JSON
//! file. Both are produced from the same in-memory plan, so record counts
//! and totals are always identical between them. The two writes are
//! independent: a failure on one artifact does not abort the other.

mod exporter;

pub use exporter::{ExportError, PlanExporter, STRUCTURED_ARTIFACT, TABULAR_ARTIFACT};

// Re-export core types for convenience
pub use migraplan_core::{FileRecord, MigrationPlan};
