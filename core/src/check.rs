//! Report checking: load a report, extract its count, produce a verdict.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::error::{CheckError, Result};
use crate::marker::{WarningCount, find_warning_count};
use crate::report::read_report;

/// Outcome of checking one report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub report: PathBuf,
    pub warnings: WarningCount,
}

impl Verdict {
    /// `true` when the report has zero warnings.
    pub fn passed(&self) -> bool {
        self.warnings.is_zero()
    }
}

/// Checks already-loaded report content.
///
/// `path` is only used to label the verdict and errors.
///
/// # Errors
///
/// Returns [`CheckError::PatternNotFound`] when the marker is absent.
pub fn check_content(path: &Path, content: &str) -> Result<Verdict> {
    let warnings = find_warning_count(content).ok_or_else(|| CheckError::PatternNotFound {
        path: path.to_path_buf(),
    })?;
    info!(report = %path.display(), warnings = %warnings, "checked report");
    Ok(Verdict {
        report: path.to_path_buf(),
        warnings,
    })
}

/// Reads and checks the report at `path`.
///
/// # Errors
///
/// Returns [`CheckError::Io`] if the report cannot be read; the pattern is
/// never applied in that case. Otherwise see [`check_content`].
pub fn check_report(path: &Path) -> Result<Verdict> {
    let content = read_report(path)?;
    check_content(path, &content)
}
