//! Complexity check command.
//!
//! Checks a codebase against configured rank ceilings and counts the
//! infractions. Evaluation is pure; the I/O sits at the edges.
//!
//! # Module Structure
//!
//! - `types` - Options, thresholds, events and the report
//! - `thresholds` - Pure evaluation of a result set
//! - `output` - Emitting events through the logging sink
//!
//! # Flow
//!
//! 1. Parse the ignore specification (fails before any analysis)
//! 2. Run the complexity analyzer once (I/O: subprocess)
//! 3. Evaluate the result set against the thresholds
//! 4. Emit every event (I/O: logging)

mod output;
mod thresholds;
pub mod types;

pub use thresholds::evaluate;
pub use types::{
    CheckOptions, EventKind, InfractionEvent, InfractionReport, Severity, ThresholdConfig,
};

use crate::harvest::{ComplexityHarvester, RadonHarvester};
use crate::ignore::{parse_ignore_spec, IgnoreMap};
use anyhow::{Context, Result};
use tracing::{debug, info_span};

// =============================================================================
// Public API
// =============================================================================

/// I/O Shell: Check the configured paths with radon and return the number
/// of infractions.
pub fn check_project(options: &CheckOptions) -> Result<usize> {
    // Fail on a malformed ignore spec before even looking for the analyzer
    let ignore = parse_ignore_spec(options.ignore_blocks.as_deref())?;

    let harvester = RadonHarvester::new(options.radon.clone())?;
    let report = run_with_ignore(options, &ignore, &harvester)?;
    Ok(report.infractions)
}

/// Run one check with the given analyzer and emit its events.
pub fn run(options: &CheckOptions, harvester: &dyn ComplexityHarvester) -> Result<InfractionReport> {
    let ignore = parse_ignore_spec(options.ignore_blocks.as_deref())?;
    run_with_ignore(options, &ignore, harvester)
}

fn run_with_ignore(
    options: &CheckOptions,
    ignore: &IgnoreMap,
    harvester: &dyn ComplexityHarvester,
) -> Result<InfractionReport> {
    let _span = info_span!("check").entered();
    debug!(modules = ignore.len(), "parsed ignore specification");

    let results = harvester
        .harvest(&options.harvest_config())
        .context("complexity analysis failed")?;
    debug!(modules = results.len(), "harvested complexity results");

    let report = evaluate(&results, ignore, &options.thresholds);
    output::emit_report(&report);

    Ok(report)
}

// =============================================================================
// Tests
// =============================================================================
