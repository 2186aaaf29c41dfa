//! Error types for ccgate operations.
//!
//! Only boundary failures live here: a malformed ignore specification,
//! an unreadable configuration file, or an analyzer that could not be run
//! or produced unusable output. A module the analyzer failed to parse is
//! not an error; it travels through the result set as
//! [`ModuleResult::ParseError`](crate::core::ModuleResult::ParseError) and
//! is reported as a warning.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Main error type for ccgate operations
#[derive(Debug, Error)]
pub enum GateError {
    /// An `--ignore-blocks` entry without exactly one `:` separator
    #[error("malformed ignore entry {entry:?}: expected <module>:<block>")]
    MalformedIgnoreEntry { entry: String },

    /// Configuration file could not be read or parsed
    #[error("configuration error in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// The analyzer executable is not installed or not on PATH
    #[error("complexity analyzer `{program}` not found (install radon or pass --radon-bin)")]
    AnalyzerNotFound {
        program: String,
        #[source]
        source: which::Error,
    },

    /// The analyzer ran but exited unsuccessfully
    #[error("complexity analyzer exited with {status}: {stderr}")]
    AnalyzerFailed { status: ExitStatus, stderr: String },

    /// The analyzer's stdout is not a result set
    #[error("complexity analyzer produced unreadable output")]
    InvalidAnalyzerOutput(#[source] serde_json::Error),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GateError {
    /// Create a malformed ignore entry error
    pub fn malformed_ignore_entry(entry: impl Into<String>) -> Self {
        Self::MalformedIgnoreEntry {
            entry: entry.into(),
        }
    }

    /// Create a configuration error with path context
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for ccgate operations
pub type Result<T> = std::result::Result<T, GateError>;
