//! Complexity harvesting through the `radon` command line tool.

use super::{ComplexityHarvester, HarvestConfig};
use crate::core::ResultSet;
use crate::errors::{GateError, Result};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;
use tracing::{debug, debug_span};

const RADON: &str = "radon";

/// Runs `radon cc --json` once over all paths.
#[derive(Debug, Clone)]
pub struct RadonHarvester {
    program: PathBuf,
}

impl RadonHarvester {
    /// Use an explicit executable, or find `radon` on PATH.
    pub fn new(program: Option<PathBuf>) -> Result<Self> {
        let program = match program {
            Some(program) => program,
            None => which::which(RADON).map_err(|source| GateError::AnalyzerNotFound {
                program: RADON.to_string(),
                source,
            })?,
        };
        Ok(Self { program })
    }

    pub fn program(&self) -> &PathBuf {
        &self.program
    }

    /// Arguments for `radon`, ranks A through F, ordered by score, no closures.
    pub fn build_args(config: &HarvestConfig) -> Vec<OsString> {
        let mut args: Vec<OsString> = ["cc", "--json", "--order", "SCORE", "--min", "A", "--max", "F"]
            .into_iter()
            .map(OsString::from)
            .collect();

        if config.no_assert {
            args.push("--no-assert".into());
        }
        if let Some(exclude) = config.exclude.as_deref().filter(|p| !p.is_empty()) {
            args.push("--exclude".into());
            args.push(exclude.into());
        }
        if let Some(ignore) = config.ignore.as_deref().filter(|p| !p.is_empty()) {
            args.push("--ignore".into());
            args.push(ignore.into());
        }

        args.extend(config.paths.iter().map(|p| p.as_os_str().to_owned()));
        args
    }
}

impl ComplexityHarvester for RadonHarvester {
    fn harvest(&self, config: &HarvestConfig) -> Result<ResultSet> {
        let _span = debug_span!("radon", program = %self.program.display()).entered();
        let args = Self::build_args(config);
        debug!(?args, "running complexity analyzer");

        let output = Command::new(&self.program).args(&args).output()?;

        if !output.status.success() {
            return Err(GateError::AnalyzerFailed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let results = ResultSet::from_json(&stdout).map_err(GateError::InvalidAnalyzerOutput)?;
        debug!(modules = results.len(), "analyzer finished");
        Ok(results)
    }
}
