//! Port to the external complexity analyzer.
//!
//! ccgate never computes complexity itself. A [`ComplexityHarvester`] turns
//! a set of paths plus pass-through analyzer options into a [`ResultSet`];
//! the threshold checks only ever see that result set.

pub mod radon;

pub use radon::RadonHarvester;

use crate::core::ResultSet;
use crate::errors::Result;
use std::path::PathBuf;

/// Analyzer options derived from the caller's options.
///
/// Pattern strings are forwarded unchanged; their syntax belongs to the
/// analyzer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarvestConfig {
    pub paths: Vec<PathBuf>,
    pub exclude: Option<String>,
    pub ignore: Option<String>,
    pub no_assert: bool,
}

/// One-shot, blocking complexity analysis.
pub trait ComplexityHarvester {
    fn harvest(&self, config: &HarvestConfig) -> Result<ResultSet>;
}

/// Harvester returning a fixed result set, for tests and embedding callers
/// that already hold analyzer output.
#[derive(Debug, Clone, Default)]
pub struct StaticHarvester {
    results: ResultSet,
}

impl StaticHarvester {
    pub fn new(results: ResultSet) -> Self {
        Self { results }
    }
}

impl ComplexityHarvester for StaticHarvester {
    fn harvest(&self, _config: &HarvestConfig) -> Result<ResultSet> {
        Ok(self.results.clone())
    }
}
