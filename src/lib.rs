// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod harvest;
pub mod ignore;
pub mod setup;

// Re-export commonly used types
pub use crate::core::{exceeds, ComplexityBlock, ModuleResult, Rank, ResultSet};

pub use crate::commands::check::{
    check_project, evaluate, run, CheckOptions, EventKind, InfractionEvent, InfractionReport,
    Severity, ThresholdConfig,
};

pub use crate::errors::GateError;

pub use crate::harvest::{ComplexityHarvester, HarvestConfig, RadonHarvester, StaticHarvester};

pub use crate::ignore::{parse_ignore_spec, IgnoreMap};
