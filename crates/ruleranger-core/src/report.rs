//! The JSON report written by the RuleRanger commandlet.
//!
//! ```json
//! {
//!   "Summary": { "AssetsScanned": 12, "Errors": 1, "Warnings": 0, "Fatals": 0 },
//!   "Results": [
//!     { "AssetName": "T_Rock", "AssetPath": "/Game/Env/T_Rock.T_Rock",
//!       "Errors": ["Texture dimensions must be a power of two"] }
//!   ]
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Errors that can occur while loading a report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to read report {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed report {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Top-level report document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ValidationReport {
    #[serde(default)]
    pub summary: ReportSummary,
    /// Only assets that produced at least one message are listed.
    #[serde(default)]
    pub results: Vec<AssetResult>,
}

/// Aggregate counts for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReportSummary {
    #[serde(default, deserialize_with = "count")]
    pub assets_scanned: u64,
    #[serde(default, deserialize_with = "count")]
    pub errors: u64,
    #[serde(default, deserialize_with = "count")]
    pub warnings: u64,
    #[serde(default, deserialize_with = "count")]
    pub fatals: u64,
}

impl ReportSummary {
    /// Whether the run would be considered a failure by the commandlet.
    pub const fn has_failures(&self, exit_on_warning: bool) -> bool {
        self.errors > 0 || self.fatals > 0 || (exit_on_warning && self.warnings > 0)
    }
}

/// Messages for a single asset. Fatal messages are folded into `errors`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AssetResult {
    pub asset_name: String,
    pub asset_path: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Parse report JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read and parse a report file.
    pub fn load(path: &Path) -> Result<Self, ReportError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ReportError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents).map_err(|source| ReportError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

// The engine's JSON writer emits every number as a double.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    Ok(value.max(0.0) as u64)
}
