//! Data types for the check command.
//!
//! Configuration going in, report coming out. These are plain data
//! structures; the evaluation lives in `thresholds`.

use crate::core::Rank;
use crate::harvest::HarvestConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Rank and score ceilings for the three check axes.
///
/// An unset ceiling disables its check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThresholdConfig {
    /// Worst rank any single block may have
    pub max_absolute: Option<Rank>,
    /// Worst rank any module's average score may have
    pub max_modules: Option<Rank>,
    /// Worst rank the codebase's average score may have
    pub max_average: Option<Rank>,
    /// Highest numeric codebase average score
    pub max_average_num: Option<f64>,
}

/// Fully resolved options for one check run.
///
/// Built once at the boundary from CLI flags and the config file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckOptions {
    pub paths: Vec<PathBuf>,
    pub exclude: Option<String>,
    pub ignore: Option<String>,
    pub no_assert: bool,
    pub thresholds: ThresholdConfig,
    pub ignore_blocks: Option<String>,
    pub radon: Option<PathBuf>,
}

impl CheckOptions {
    pub fn harvest_config(&self) -> HarvestConfig {
        HarvestConfig {
            paths: self.paths.clone(),
            exclude: self.exclude.clone(),
            ignore: self.ignore.clone(),
            no_assert: self.no_assert,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// Which check produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    ParseFailure,
    BlockRank,
    TotalAverageScore,
    TotalAverageRank,
    ModuleRank,
}

/// One diagnostic produced while evaluating a result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfractionEvent {
    pub severity: Severity,
    pub kind: EventKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lineno: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<Rank>,
}

impl InfractionEvent {
    pub fn parse_failure(module: &str, error: &str) -> Self {
        Self {
            severity: Severity::Warning,
            kind: EventKind::ParseFailure,
            message: format!("cannot parse {module}: {error}"),
            module: Some(module.to_string()),
            block: None,
            lineno: None,
            rank: None,
        }
    }

    pub fn block_rank(module: &str, lineno: u32, name: &str, rank: Rank) -> Self {
        Self {
            severity: Severity::Error,
            kind: EventKind::BlockRank,
            message: format!("block \"{module}:{lineno} {name}\" has a rank of {rank}"),
            module: Some(module.to_string()),
            block: Some(name.to_string()),
            lineno: Some(lineno),
            rank: Some(rank),
        }
    }

    pub fn total_average_score(average: f64) -> Self {
        Self {
            severity: Severity::Error,
            kind: EventKind::TotalAverageScore,
            message: format!("total average complexity is {average:?}"),
            module: None,
            block: None,
            lineno: None,
            rank: None,
        }
    }

    pub fn total_average_rank(rank: Rank) -> Self {
        Self {
            severity: Severity::Error,
            kind: EventKind::TotalAverageRank,
            message: format!("average complexity is ranked {rank}"),
            module: None,
            block: None,
            lineno: None,
            rank: Some(rank),
        }
    }

    pub fn module_rank(module: &str, rank: Rank) -> Self {
        Self {
            severity: Severity::Error,
            kind: EventKind::ModuleRank,
            message: format!("module \"{module}\" has a rank of {rank}"),
            module: Some(module.to_string()),
            block: None,
            lineno: None,
            rank: Some(rank),
        }
    }
}

/// Outcome of evaluating a result set.
///
/// `infractions` counts error events; warnings never count.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InfractionReport {
    pub infractions: usize,
    pub events: Vec<InfractionEvent>,
}

impl InfractionReport {
    pub fn passed(&self) -> bool {
        self.infractions == 0
    }

    /// Record an event, counting it when it is an error.
    pub fn push(&mut self, event: InfractionEvent) {
        if event.severity == Severity::Error {
            self.infractions += 1;
        }
        self.events.push(event);
    }

    pub fn warnings(&self) -> impl Iterator<Item = &InfractionEvent> {
        self.events
            .iter()
            .filter(|e| e.severity == Severity::Warning)
    }
}
