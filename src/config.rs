//! Run configuration for the command-line front end.
//!
//! The extraction core needs no configuration beyond its fixed rule and
//! denylist tables; these settings only steer corpus loading and output.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of entries shown in the top-N summary.
pub const DEFAULT_TOP_N: usize = 10;
/// Default percentage threshold for the "appears in most shows" summary.
pub const DEFAULT_THRESHOLD_PERCENT: f64 = 50.0;
/// Default extension of recognized-text files.
pub const DEFAULT_EXTENSION: &str = "txt";

/// Errors raised while assembling a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform data directory could not be determined.
    #[error("Failed to determine data directory")]
    NoDataDir,

    /// An environment variable held a value that could not be parsed.
    #[error("Invalid value for {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },

    /// Threshold outside 0-100.
    #[error("Threshold must be between 0 and 100, got {0}")]
    ThresholdOutOfRange(f64),

    /// Extension was empty after stripping a leading dot.
    #[error("File extension cannot be empty")]
    EmptyExtension,
}

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Ranked table followed by the top-N and threshold summaries.
    #[default]
    Table,
    /// JSON envelope around the report.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Explicit settings for one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding one recognized-text file per document.
    pub documents_dir: PathBuf,
    /// File extension (without the dot) selecting document files.
    pub extension: String,
    /// Entries shown in the top-N summary.
    pub top_n: usize,
    /// Minimum percentage for the threshold summary, inclusive.
    pub threshold_percent: f64,
    pub format: OutputFormat,
}

/// Builder for constructing `Config` instances.
///
/// Values not set explicitly fall back to environment variables and then to
/// defaults:
///
/// | field | variable | default |
/// |---|---|---|
/// | `documents_dir` | `SETLIST_DOCS_DIR` | `{data_dir}/setlist-stats/ocr` |
/// | `extension` | `SETLIST_EXTENSION` | `txt` |
/// | `top_n` | `SETLIST_TOP_N` | 10 |
/// | `threshold_percent` | `SETLIST_THRESHOLD` | 50.0 |
///
/// # Examples
///
/// ```
/// use setlist_stats::config::{ConfigBuilder, OutputFormat};
///
/// let config = ConfigBuilder::new()
///     .documents_dir("/tmp/ocr")
///     .extension(".TXT")
///     .top_n(5)
///     .threshold_percent(30.0)
///     .format(OutputFormat::Json)
///     .build()
///     .expect("valid config");
///
/// assert_eq!(config.extension, "txt");
/// assert_eq!(config.top_n, 5);
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    documents_dir: Option<PathBuf>,
    extension: Option<String>,
    top_n: Option<usize>,
    threshold_percent: Option<f64>,
    format: Option<OutputFormat>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn documents_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.documents_dir = Some(dir.into());
        self
    }

    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    pub fn top_n(mut self, top_n: usize) -> Self {
        self.top_n = Some(top_n);
        self
    }

    pub fn threshold_percent(mut self, threshold: f64) -> Self {
        self.threshold_percent = Some(threshold);
        self
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Builds the `Config`, resolving unset fields from the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if an environment value does not parse, the
    /// threshold is outside 0-100, the extension is empty, or no documents
    /// directory was given and the data directory cannot be determined.
    pub fn build(self) -> Result<Config, ConfigError> {
        let documents_dir = match self.documents_dir {
            Some(dir) => dir,
            None => match std::env::var("SETLIST_DOCS_DIR") {
                Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
                _ => default_documents_dir()?,
            },
        };

        let extension = self
            .extension
            .or_else(|| std::env::var("SETLIST_EXTENSION").ok())
            .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());
        let extension = extension.trim().trim_start_matches('.').to_lowercase();
        if extension.is_empty() {
            return Err(ConfigError::EmptyExtension);
        }

        let top_n = match self.top_n {
            Some(n) => n,
            None => env_or("SETLIST_TOP_N", DEFAULT_TOP_N)?,
        };

        let threshold_percent = match self.threshold_percent {
            Some(t) => t,
            None => env_or("SETLIST_THRESHOLD", DEFAULT_THRESHOLD_PERCENT)?,
        };
        if !(0.0..=100.0).contains(&threshold_percent) {
            return Err(ConfigError::ThresholdOutOfRange(threshold_percent));
        }

        Ok(Config {
            documents_dir,
            extension,
            top_n,
            threshold_percent,
            format: self.format.unwrap_or_default(),
        })
    }
}

/// Gets the cross-platform default documents directory.
///
/// Returns `{data_dir}/setlist-stats/ocr` where `data_dir` is:
/// - Linux: `~/.local/share`
/// - macOS: `~/Library/Application Support`
/// - Windows: `C:\Users\<user>\AppData\Roaming`
///
/// # Errors
///
/// Returns an error if the data directory cannot be determined.
pub fn default_documents_dir() -> Result<PathBuf, ConfigError> {
    let data_dir = dirs::data_dir().ok_or(ConfigError::NoDataDir)?;
    Ok(data_dir.join("setlist-stats").join("ocr"))
}

fn env_or<T: FromStr>(var: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidEnv { var, value }),
        _ => Ok(default),
    }
}
