//! Error types for report checking.
//!
//! Every way the checker can fail to produce a verdict is a variant here.
//! A non-zero warning count is not an error: it is a failing
//! [`Verdict`](crate::Verdict).

use std::path::PathBuf;

use thiserror::Error;

/// Errors that prevent a report from being checked.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The report file could not be read.
    #[error("failed to read report '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The report does not contain the "Total Warnings" marker.
    #[error("no 'Total Warnings' marker found in report '{}'", path.display())]
    PatternNotFound { path: PathBuf },

    /// The configuration file could not be read.
    #[error("failed to read config '{}': {source}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid YAML for [`GateConfig`](crate::GateConfig).
    #[error("invalid config '{}': {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Convenience alias for results with [`CheckError`].
pub type Result<T> = std::result::Result<T, CheckError>;
