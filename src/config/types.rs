//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// Defaults for scraping and steady-state analysis.
///
/// All fields are optional so users only need to specify what they want
/// to override. CLI flags take priority over config, which overrides defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// First block counted in chain totals (None = 2)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_block: Option<u64>,
    /// Last block counted in chain totals (None = number of block lines + 1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cease_block: Option<u64>,
    /// Extra blocks dropped from each end of the steady-state window
    #[serde(default)]
    pub num_addl_blocks_to_drop: usize,
    /// Fail on block lines in an unknown format instead of skipping them
    #[serde(default)]
    pub strict: bool,
}

impl AnalysisConfig {
    /// Validate configuration values.
    ///
    /// Returns `Ok(())` if the values are consistent, or an error describing
    /// the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        if let (Some(start), Some(cease)) = (self.start_block, self.cease_block) {
            if start > cease {
                return Err(format!(
                    "analysis.start_block {} is after analysis.cease_block {}",
                    start, cease
                ));
            }
        }
        Ok(())
    }
}

/// Report export configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Default path for `score --export` when no path is given
    #[serde(default = "default_report_output")]
    pub output: String,
    /// Node binary queried with `--version` for the report
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_bin: Option<String>,
}

pub fn default_report_output() -> String {
    "data.json".to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output: default_report_output(),
            node_bin: None,
        }
    }
}
