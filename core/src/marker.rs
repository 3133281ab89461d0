//! The "Total Warnings" marker pattern.
//!
//! FindBugs' HTML summary renders the total as a two-cell table row:
//!
//! ```text
//! <b>Total Warnings</b> </td> <td align="right"> <b>3</b>
//! ```
//!
//! Only the first occurrence is considered. Case folding and whitespace are
//! ASCII-only.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::debug;

static TOTAL_WARNINGS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i-u)<b>Total Warnings</b>\s+</td>\s+<td align="right">\s+<b>([0-9]+)</b>"#)
        .expect("static regex must compile")
});

/// Warning count captured from a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WarningCount {
    /// Digits exactly as they appear in the report.
    pub raw: String,
    /// Numeric value, `None` when the digits do not fit in a `u64`.
    pub value: Option<u64>,
}

impl WarningCount {
    /// Wraps an ASCII digit string.
    pub fn from_digits(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            value: raw.parse::<u64>().ok(),
        }
    }

    /// Zero-ness is decided on the digits, so oversized counts still fail.
    pub fn is_zero(&self) -> bool {
        self.raw.bytes().all(|b| b == b'0')
    }
}

impl std::fmt::Display for WarningCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Finds the first "Total Warnings" marker in `content` and returns its count.
///
/// Returns `None` when the marker is absent.
pub fn find_warning_count(content: &str) -> Option<WarningCount> {
    let Some(caps) = TOTAL_WARNINGS_RE.captures(content) else {
        debug!("total warnings marker not found");
        return None;
    };
    let digits = &caps[1];
    debug!(
        offset = caps.get(0).map_or(0, |m| m.start()),
        digits, "matched total warnings marker"
    );
    Some(WarningCount::from_digits(digits))
}
