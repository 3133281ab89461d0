//! Gate configuration.
//!
//! Optional YAML file, typically checked into the repository next to the CI
//! script:
//!
//! ```yaml
//! companion_report: build/findbugs/findbugs.txt
//! format: text
//! ```
//!
//! Missing keys fall back to their defaults.

use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CheckError, Result};
use crate::output::OutputFormat;
use crate::report::DEFAULT_COMPANION_REPORT;

/// Settings for one gate run.
///
/// # Examples
///
/// ```
/// # use warning_gate_core::{GateConfig, OutputFormat};
/// let config: GateConfig = serde_yaml::from_str("format: json").unwrap();
/// assert_eq!(config.format, OutputFormat::Json);
/// assert_eq!(
///     config.companion_report,
///     std::path::PathBuf::from("./build/findbugs/findbugs.txt")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Text report echoed to stdout when the gate fails.
    pub companion_report: PathBuf,
    /// Output format for the verdict.
    pub format: OutputFormat,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            companion_report: PathBuf::from(DEFAULT_COMPANION_REPORT),
            format: OutputFormat::Text,
        }
    }
}

impl GateConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::ConfigIo`] if the file cannot be read, or
    /// [`CheckError::Config`] if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| CheckError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_reader(BufReader::new(file)).map_err(|source| CheckError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Saves the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::ConfigIo`] if the file cannot be written or
    /// flushed, or [`CheckError::Config`] if serialization fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path).map_err(|source| CheckError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        serde_yaml::to_writer(&mut writer, self).map_err(|source| CheckError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        writer.flush().map_err(|source| CheckError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Applies command-line overrides on top of file or default values.
    pub fn with_overrides(mut self, companion: Option<PathBuf>, format: Option<OutputFormat>) -> Self {
        if let Some(companion) = companion {
            self.companion_report = companion;
        }
        if let Some(format) = format {
            self.format = format;
        }
        self
    }
}
