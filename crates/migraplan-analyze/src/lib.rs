//! Analysis stages for migraplan.
//!
//! This crate narrows and measures the record set produced by a scan:
//!
//! - **Classification** - keep only records whose type is supported for
//!   migration
//! - **Aggregation** - the single total-size implementation used anywhere
//!   a byte total is reported
//! - **Advisories** - flag files too large for unattended migration
//!
//! # Example
//!
//! ```rust,ignore
//! use migraplan_analyze::{SizeAdvisor, filter_supported, total_size};
//! use migraplan_scan::{MigrationConfig, PlanScanner};
//!
//! let config = MigrationConfig::default();
//! let outcome = PlanScanner::new().scan("/srv/docs".as_ref(), &config).unwrap();
//!
//! let supported = filter_supported(outcome.records(), &config);
//! println!("{} of {} files are migratable", supported.len(), outcome.len());
//! println!("{} bytes total", total_size(&supported));
//!
//! let report = SizeAdvisor::from_config(&config).advise(outcome.records());
//! for advisory in &report.advisories {
//!     println!("Review before migrating: {}", advisory.path.display());
//! }
//! ```

mod advisor;
mod classify;
mod size;

pub use advisor::{Advisory, AdvisoryReport, SizeAdvisor};
pub use classify::filter_supported;
pub use size::total_size;

// Re-export core types
pub use migraplan_core::{FileRecord, MigrationConfig, MigrationPlan, ScanOutcome};
