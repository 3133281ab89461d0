//! Report and companion file loading.

use std::path::Path;

use tracing::{debug, warn};

use crate::error::{CheckError, Result};

/// Companion text report that FindBugs writes next to the HTML summary.
pub const DEFAULT_COMPANION_REPORT: &str = "./build/findbugs/findbugs.txt";

/// Reads the whole report into memory.
///
/// Invalid UTF-8 is replaced rather than rejected; the marker is ASCII.
///
/// # Errors
///
/// Returns [`CheckError::Io`] if the file cannot be read.
pub fn read_report(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| CheckError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), len = bytes.len(), "read report");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Reads the companion report, if there is one.
///
/// A missing or unreadable companion is logged and skipped.
pub fn read_companion(path: &Path) -> Option<String> {
    match std::fs::read(path) {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(err) => {
            warn!(path = %path.display(), "companion report unavailable: {err}");
            None
        }
    }
}
