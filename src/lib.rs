//! migraplan - local directory inventory ahead of a document-store
//! migration.
//!
//! The pipeline runs as sequential stages over one owned record set:
//! scan the root, classify records by supported type, aggregate sizes and
//! flag oversized files, then export the plan as two artifacts. Each
//! invocation owns its configuration and plan; there is no process-wide
//! state.

use std::path::{Path, PathBuf};

use tracing::{error, info};

use migraplan_analyze::{AdvisoryReport, SizeAdvisor, filter_supported, total_size};
use migraplan_export::{ExportError, PlanExporter, STRUCTURED_ARTIFACT, TABULAR_ARTIFACT};
use migraplan_scan::PlanScanner;

pub use migraplan_core::{
    FileRecord, MigrationConfig, MigrationPlan, ScanError, ScanOutcome, ScanWarning,
};

/// Outcome of writing one artifact. A failed artifact never aborts the
/// other one.
#[derive(Debug)]
pub struct ArtifactReport {
    /// Where the artifact was (or would have been) written.
    pub path: PathBuf,
    /// Error if this artifact failed.
    pub result: Result<(), ExportError>,
}

impl ArtifactReport {
    /// Whether this artifact was written successfully.
    pub fn ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Report returned by one pipeline invocation.
#[derive(Debug)]
pub struct PlanReport {
    /// Readable regular files discovered under the root.
    pub scanned: usize,
    /// Files selected for migration after classification.
    pub supported: usize,
    /// Total bytes across all scanned files.
    pub total_bytes: u64,
    /// Total bytes across the migration plan.
    pub supported_bytes: u64,
    /// Oversize advisories for operator review.
    pub advisories: AdvisoryReport,
    /// Files dropped because they could not be read.
    pub skipped: u64,
    /// Warnings collected during the scan.
    pub warnings: Vec<ScanWarning>,
    /// Whether the scan was cancelled midway.
    pub cancelled: bool,
    /// Tabular artifact outcome.
    pub tabular: ArtifactReport,
    /// Structured artifact outcome.
    pub structured: ArtifactReport,
}

impl PlanReport {
    /// Whether any artifact failed to export.
    pub fn export_failed(&self) -> bool {
        !self.tabular.ok() || !self.structured.ok()
    }
}

/// Run the whole pipeline for one root directory.
///
/// Fails only when the root is invalid, in which case no artifacts are
/// produced. Per-file read failures and per-artifact export failures are
/// reported on the returned [`PlanReport`] instead.
pub fn run(
    root: &Path,
    config: &MigrationConfig,
    out_dir: &Path,
) -> Result<PlanReport, ScanError> {
    let outcome = PlanScanner::new().scan(root, config)?;
    info!(
        files = outcome.len(),
        skipped = outcome.skipped_count(),
        "scan complete"
    );

    let plan = MigrationPlan::new(filter_supported(outcome.records(), config));

    let total_bytes = total_size(outcome.records());
    let supported_bytes = total_size(plan.records());

    let advisories = SizeAdvisor::from_config(config).advise(outcome.records());

    let exporter = PlanExporter::new();
    let tabular = artifact_report(
        out_dir.join(TABULAR_ARTIFACT),
        exporter.write_tabular(&plan, out_dir),
    );
    let structured = artifact_report(
        out_dir.join(STRUCTURED_ARTIFACT),
        exporter.write_structured(&plan, out_dir),
    );

    Ok(PlanReport {
        scanned: outcome.len(),
        supported: plan.len(),
        total_bytes,
        supported_bytes,
        advisories,
        skipped: outcome.skipped_count(),
        warnings: outcome.warnings,
        cancelled: outcome.cancelled,
        tabular,
        structured,
    })
}

fn artifact_report(
    expected_path: PathBuf,
    result: Result<PathBuf, ExportError>,
) -> ArtifactReport {
    match result {
        Ok(path) => ArtifactReport {
            path,
            result: Ok(()),
        },
        Err(err) => {
            error!(path = %expected_path.display(), error = %err, "artifact export failed");
            ArtifactReport {
                path: expected_path,
                result: Err(err),
            }
        }
    }
}
