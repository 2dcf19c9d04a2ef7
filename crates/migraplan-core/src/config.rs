//! Migration configuration.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Default advisory threshold: 250 MiB.
pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 250 * 1024 * 1024;

/// Configuration for one pipeline invocation.
///
/// Exactly one authoritative field per concept. Each invocation owns its
/// own value; nothing here is shared or process-global.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct MigrationConfig {
    /// Files strictly larger than this are flagged by the advisor.
    #[builder(default = "DEFAULT_MAX_FILE_SIZE_BYTES")]
    #[serde(default = "default_max_file_size")]
    pub max_file_size_bytes: u64,

    /// Directory names whose whole subtree is skipped during the scan.
    #[builder(default = "default_excluded_folders()")]
    #[serde(default = "default_excluded_folders")]
    pub excluded_folders: Vec<String>,

    /// Extensions eligible for migration, compared case-insensitively.
    #[builder(default = "default_supported_types()")]
    #[serde(default = "default_supported_types")]
    pub supported_types: Vec<String>,

    /// Number of threads for scanning (0 = auto-detect).
    #[builder(default = "0")]
    #[serde(default)]
    pub threads: usize,
}

fn default_max_file_size() -> u64 {
    DEFAULT_MAX_FILE_SIZE_BYTES
}

fn default_excluded_folders() -> Vec<String> {
    ["temp", "cache", "node_modules", ".git"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_supported_types() -> Vec<String> {
    ["docx", "xlsx", "pptx", "pdf"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl MigrationConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref folders) = self.excluded_folders {
            for name in folders {
                if name.is_empty() || name.contains('/') || name.contains('\\') {
                    return Err(format!(
                        "Excluded folder must be a bare directory name: {name:?}"
                    ));
                }
            }
        }
        if let Some(ref types) = self.supported_types {
            if types.iter().any(|t| t.starts_with('.')) {
                return Err("Supported types are given without the leading dot".to_string());
            }
        }
        Ok(())
    }
}

impl MigrationConfig {
    /// Create a new config builder.
    pub fn builder() -> MigrationConfigBuilder {
        MigrationConfigBuilder::default()
    }

    /// Check if a directory name is excluded from the scan.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded_folders.iter().any(|f| f == name)
    }

    /// Check if an extension is eligible for migration.
    pub fn is_supported(&self, kind: &str) -> bool {
        self.supported_types.iter().any(|t| t.eq_ignore_ascii_case(kind))
    }
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            max_file_size_bytes: DEFAULT_MAX_FILE_SIZE_BYTES,
            excluded_folders: default_excluded_folders(),
            supported_types: default_supported_types(),
            threads: 0,
        }
    }
}
