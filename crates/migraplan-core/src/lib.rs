//! Core types for migraplan.
//!
//! This crate provides the fundamental data structures shared across the
//! migration pipeline: file records, the scan outcome, the migration plan,
//! configuration, and the error taxonomy.

mod config;
mod error;
mod plan;
mod record;

pub use config::{DEFAULT_MAX_FILE_SIZE_BYTES, MigrationConfig, MigrationConfigBuilder};
pub use error::{ExtractError, ScanError, ScanWarning, WarningKind};
pub use plan::{MigrationPlan, ScanOutcome};
pub use record::FileRecord;
