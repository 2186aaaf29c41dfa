//! Event emission for the check command.
//!
//! Every event in a report becomes exactly one log record, in report order.
//! Records carry the message line only; callers wanting module, block or
//! rank as data read them from the [`InfractionReport`] itself.

use super::types::{InfractionEvent, InfractionReport, Severity};
use tracing::{debug, error, warn};

/// I/O: Emit one event through the logging sink.
pub fn emit_event(event: &InfractionEvent) {
    match event.severity {
        Severity::Warning => warn!("{}", event.message),
        Severity::Error => error!("{}", event.message),
    }
}

/// I/O: Emit all events of a report, then a summary at debug level.
pub fn emit_report(report: &InfractionReport) {
    report.events.iter().for_each(emit_event);
    debug!(
        infractions = report.infractions,
        warnings = report.warnings().count(),
        "evaluation finished"
    );
}
