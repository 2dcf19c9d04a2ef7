//! Export of a migration plan into the two artifact formats.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use migraplan_core::{FileRecord, MigrationPlan};

/// Fixed file name of the tabular artifact.
pub const TABULAR_ARTIFACT: &str = "plan_migracion.csv";

/// Fixed file name of the structured artifact.
pub const STRUCTURED_ARTIFACT: &str = "plan_migracion.json";

/// Column header of the tabular artifact. The field names are part of the
/// external contract consumed by downstream tooling.
const TABULAR_HEADER: [&str; 3] = ["Ruta", "Tamaño", "Tipo"];

/// Errors raised while exporting one artifact. Fatal only for that
/// artifact; the other export may still succeed independently.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The artifact could not be written.
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Record serialization failed.
    #[error("Serialization failed: {message}")]
    Serialization { message: String },
}

impl ExportError {
    fn serialization(err: impl std::fmt::Display) -> Self {
        Self::Serialization {
            message: err.to_string(),
        }
    }
}

/// One object of the structured artifact. Key names and their order follow
/// the external contract (matching the tabular header).
#[derive(Debug, Serialize)]
struct PlanRow {
    #[serde(rename = "Ruta")]
    ruta: String,
    #[serde(rename = "Tamano")]
    tamano: u64,
    #[serde(rename = "Tipo")]
    tipo: String,
}

impl PlanRow {
    fn from_record(record: &FileRecord) -> Self {
        Self {
            ruta: record.path.to_string_lossy().into_owned(),
            tamano: record.size_bytes,
            tipo: record.kind.to_string(),
        }
    }
}

/// Serializes a migration plan into the two supported formats.
///
/// A single component produces both formats from one shared record type,
/// so the artifacts can never disagree on count or content.
#[derive(Debug, Default)]
pub struct PlanExporter;

impl PlanExporter {
    /// Create a new exporter.
    pub fn new() -> Self {
        Self
    }

    /// Render the tabular format: header line then one comma-separated row
    /// per record. Quoting of embedded separators is delegated to the csv
    /// writer.
    pub fn to_tabular(&self, plan: &MigrationPlan) -> Result<String, ExportError> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        writer
            .write_record(TABULAR_HEADER)
            .map_err(ExportError::serialization)?;

        for record in plan.records() {
            writer
                .write_record([
                    record.path.to_string_lossy().into_owned(),
                    record.size_bytes.to_string(),
                    record.kind.to_string(),
                ])
                .map_err(ExportError::serialization)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(ExportError::serialization)?;
        String::from_utf8(bytes).map_err(ExportError::serialization)
    }

    /// Render the structured format: a pretty-printed array of objects
    /// with keys in tabular-header order.
    pub fn to_structured(&self, plan: &MigrationPlan) -> Result<String, ExportError> {
        let rows: Vec<PlanRow> = plan.records().iter().map(PlanRow::from_record).collect();
        serde_json::to_string_pretty(&rows).map_err(ExportError::serialization)
    }

    /// Write the tabular artifact into `dir`, truncating any existing file.
    pub fn write_tabular(&self, plan: &MigrationPlan, dir: &Path) -> Result<PathBuf, ExportError> {
        let path = dir.join(TABULAR_ARTIFACT);
        let text = self.to_tabular(plan)?;
        fs::write(&path, text).map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), records = plan.len(), "wrote tabular artifact");
        Ok(path)
    }

    /// Write the structured artifact into `dir`, truncating any existing
    /// file.
    pub fn write_structured(
        &self,
        plan: &MigrationPlan,
        dir: &Path,
    ) -> Result<PathBuf, ExportError> {
        let path = dir.join(STRUCTURED_ARTIFACT);
        let text = self.to_structured(plan)?;
        fs::write(&path, text).map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), records = plan.len(), "wrote structured artifact");
        Ok(path)
    }
}
