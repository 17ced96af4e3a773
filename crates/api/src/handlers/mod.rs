use timegrid_core::TimetableError;
use tracing::{error, warn};

pub mod generate;
pub mod master;
pub mod shell;
pub mod student;

/// Logs a failed panel load. Backend failures are errors, anything else is a
/// rejected request.
pub(crate) fn log_failure(operation: &'static str, err: &TimetableError) {
    if err.is_upstream_failure() {
        error!(operation, error = %err, "Timetable backend request failed");
    } else {
        warn!(operation, error = %err, "Timetable request rejected");
    }
}
