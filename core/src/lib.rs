//! CI gate on FindBugs warning counts.
//!
//! This crate reads a FindBugs HTML summary, extracts the "Total Warnings"
//! count, and turns it into a [`Verdict`]:
//!
//! - [`find_warning_count`] — locate the first marker row and parse its count.
//! - [`check_report`] / [`check_content`] — produce a [`Verdict`], or a
//!   [`CheckError`] when no verdict is possible (unreadable report, missing
//!   marker).
//! - [`read_companion`] — load the optional text report shown on failure.
//! - [`format_verdict`] — render the verdict as text or JSON.
//! - [`GateConfig`] — YAML configuration.
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use warning_gate_core::*;
//!
//! let html = r#"<b>Total Warnings</b> </td> <td align="right"> <b>3</b>"#;
//! let verdict = check_content(Path::new("findbugs.html"), html).unwrap();
//! assert!(!verdict.passed());
//!
//! let text = format_verdict(&verdict, Path::new("findbugs.txt"), None, OutputFormat::Text).unwrap();
//! assert_eq!(text, "\n\nFindbugs has 3 warnings\n\n\n");
//! ```

mod check;
mod config;
mod error;
mod marker;
mod output;
mod report;

pub use check::{Verdict, check_content, check_report};
pub use config::GateConfig;
pub use error::{CheckError, Result};
pub use marker::{WarningCount, find_warning_count};
pub use output::{OutputFormat, VerdictReport, failure_message, format_verdict};
pub use report::{DEFAULT_COMPANION_REPORT, read_companion, read_report};
