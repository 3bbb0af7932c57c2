//! JSON export of a scored benchmark run.
//!
//! The document has a fixed shape, with keys sorted and two-space indentation:
//!
//! ```text
//! {
//!   "TPS": { "avg": ..., "emptyBlocks": ..., "max": ..., "min": ..., "numBlocks": ..., "sigma": ... },
//!   "args": "...",
//!   "env": "...",
//!   "nodeosVersion": "..."
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use sysinfo::{System, SystemExt};

use crate::analysis::TpsStats;

/// Errors that can occur while exporting a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write report to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A scored run plus the context needed to compare it with other runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PerformanceReport {
    #[serde(rename = "nodeosVersion")]
    pub node_version: String,
    pub env: String,
    pub args: String,
    #[serde(rename = "TPS")]
    pub tps: TpsStats,
}

impl PerformanceReport {
    pub fn new(node_version: impl Into<String>, args: impl Into<String>, tps: TpsStats) -> Self {
        Self {
            node_version: node_version.into(),
            env: environment_descriptor(),
            args: args.into(),
            tps,
        }
    }

    /// Render the report as pretty-printed JSON with sorted keys.
    pub fn to_json(&self) -> Result<String, ReportError> {
        // Going through Value sorts every object's keys.
        let value = serde_json::to_value(self)?;
        Ok(serde_json::to_string_pretty(&value)?)
    }

    /// Write the report to `path`, replacing any existing file.
    pub fn write(&self, path: &Path) -> Result<(), ReportError> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|source| ReportError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "wrote performance report");
        Ok(())
    }
}

/// Describe the platform this binary runs on, e.g. `linux unix 6.8.0-45-generic`.
///
/// The last part is the kernel release; it is `unknown` where the platform
/// does not report one.
pub fn environment_descriptor() -> String {
    format!(
        "{} {} {}",
        std::env::consts::OS,
        std::env::consts::FAMILY,
        os_release()
    )
}

fn os_release() -> String {
    System::new()
        .kernel_version()
        .filter(|release| !release.trim().is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
