//! Output formatting for verdicts.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::check::Verdict;
use crate::marker::WarningCount;

/// Supported output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Machine-readable verdict emitted by [`OutputFormat::Json`].
#[derive(Debug, Serialize)]
pub struct VerdictReport<'a> {
    pub report: &'a Path,
    /// `null` when the count does not fit in a `u64`.
    pub warnings: Option<u64>,
    pub warning_digits: &'a str,
    pub passed: bool,
    pub companion_report: &'a Path,
}

/// Message printed after the companion report when warnings were found.
pub fn failure_message(count: &WarningCount) -> String {
    format!("\n\nFindbugs has {count} warnings\n\n\n")
}

/// Formats a verdict in the requested output format.
///
/// Text output is empty for a passing verdict. For a failing one it is the
/// companion content, if any, followed by [`failure_message`]. JSON output
/// never includes the companion content.
pub fn format_verdict(
    verdict: &Verdict,
    companion_path: &Path,
    companion: Option<&str>,
    format: OutputFormat,
) -> Result<String, String> {
    match format {
        OutputFormat::Text => {
            if verdict.passed() {
                return Ok(String::new());
            }
            let mut out = companion.unwrap_or_default().to_string();
            out.push_str(&failure_message(&verdict.warnings));
            Ok(out)
        }
        OutputFormat::Json => {
            let report = VerdictReport {
                report: &verdict.report,
                warnings: verdict.warnings.value,
                warning_digits: &verdict.warnings.raw,
                passed: verdict.passed(),
                companion_report: companion_path,
            };
            let mut json = serde_json::to_string_pretty(&report)
                .map_err(|e| format!("JSON serialization failed: {e}"))?;
            json.push('\n');
            Ok(json)
        }
    }
}
