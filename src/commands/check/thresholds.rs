//! Pure threshold evaluation.
//!
//! Three independent axes are checked, and a codebase can fail any
//! combination of them:
//! - per block: each block's rank against `max_absolute`, minus ignored blocks
//! - per module: the rank of each module's average score against `max_modules`
//! - codebase: the average score against `max_average_num`, and its rank
//!   against `max_average`
//!
//! Averages are taken over numeric scores and ranked afterwards, never the
//! other way round. Ignored blocks still count towards every average.

use super::types::{InfractionEvent, InfractionReport, ThresholdConfig};
use crate::core::{exceeds, ModuleResult, Rank, ResultSet};
use crate::ignore::IgnoreMap;

/// `total / count`, or 0 when there is nothing to average.
fn average(total: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}

/// Evaluate a result set against the configured ceilings.
///
/// Events are ordered: parse warnings and block errors in result-set order,
/// then the codebase checks, then module errors in result-set order.
pub fn evaluate(
    results: &ResultSet,
    ignore: &IgnoreMap,
    thresholds: &ThresholdConfig,
) -> InfractionReport {
    let mut report = InfractionReport::default();
    let mut module_averages: Vec<(&str, f64)> = Vec::with_capacity(results.len());
    let mut total_score = 0.0;
    let mut total_blocks = 0usize;

    for (module, result) in results.iter() {
        let blocks = match result {
            ModuleResult::ParseError(failure) => {
                report.push(InfractionEvent::parse_failure(module, &failure.error));
                continue;
            }
            ModuleResult::Blocks(blocks) => blocks,
        };

        let mut module_score = 0.0;
        for block in blocks {
            module_score += f64::from(block.complexity);
            let rank = Rank::from_score(f64::from(block.complexity));
            if exceeds(rank, thresholds.max_absolute) && !ignore.is_ignored(module, &block.name) {
                report.push(InfractionEvent::block_rank(module, block.lineno, &block.name, rank));
            }
        }

        module_averages.push((module.as_str(), average(module_score, blocks.len())));
        total_score += module_score;
        total_blocks += blocks.len();
    }

    let total_average = average(total_score, total_blocks);

    if thresholds
        .max_average_num
        .is_some_and(|ceiling| total_average > ceiling)
    {
        report.push(InfractionEvent::total_average_score(total_average));
    }

    let total_rank = Rank::from_score(total_average);
    if exceeds(total_rank, thresholds.max_average) {
        report.push(InfractionEvent::total_average_rank(total_rank));
    }

    for (module, module_average) in module_averages {
        let rank = Rank::from_score(module_average);
        if exceeds(rank, thresholds.max_modules) {
            report.push(InfractionEvent::module_rank(module, rank));
        }
    }

    report
}
