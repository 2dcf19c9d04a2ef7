//! Directory scanning engine for migraplan.
//!
//! This crate walks a directory tree and turns every readable regular file
//! into a [`FileRecord`]. Key behaviors:
//!
//! - **Parallel traversal** via jwalk, with excluded folders pruned so the
//!   whole subtree is skipped
//! - **Per-file recovery**: a file that cannot be read is dropped with a
//!   warning, never aborting the scan
//! - **Deterministic order**: records are sorted by path before they are
//!   returned, so both export formats see the same sequence
//! - **Cooperative cancellation** checked between directory entries
//!
//! # Example
//!
//! ```rust,no_run
//! use migraplan_scan::{MigrationConfig, PlanScanner};
//!
//! let config = MigrationConfig::default();
//! let scanner = PlanScanner::new();
//! let outcome = scanner.scan("/srv/docs".as_ref(), &config).unwrap();
//!
//! println!("Found {} files", outcome.len());
//! println!("Skipped {} unreadable files", outcome.skipped_count());
//! ```

mod cancel;
mod extract;
mod scanner;

pub use cancel::CancelFlag;
pub use extract::extract;
pub use scanner::PlanScanner;

// Re-export core types for convenience
pub use migraplan_core::{
    ExtractError, FileRecord, MigrationConfig, ScanError, ScanOutcome, ScanWarning, WarningKind,
};
