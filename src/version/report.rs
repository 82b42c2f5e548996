//! Turns an update decision into a severity + message pair
//!
//! Pure data transformation; the caller decides how and where to emit the
//! message (the CLI maps severities onto tracing levels).

use crate::version::checker::UpdateOutcome;

/// How loudly the caller should surface the message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Debug,
    Warning,
    Error,
}

/// A formatted check result ready to be logged or displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub severity: Severity,
    pub message: String,
}

/// Format an outcome for a package. `NotFound` yields `None`: the caller
/// takes no action when the registry had nothing to say.
pub fn format_outcome(outcome: &UpdateOutcome, package_name: &str) -> Option<Report> {
    match outcome {
        UpdateOutcome::UpdateAvailable { current, latest } => Some(Report {
            severity: Severity::Warning,
            message: format!(
                "A new {} version is available ({} > {})",
                package_name, latest, current
            ),
        }),
        UpdateOutcome::UpToDate(current) => Some(Report {
            severity: Severity::Debug,
            message: format!(
                "Using the latest version of {} ({})",
                package_name, current
            ),
        }),
        UpdateOutcome::NotFound => None,
        UpdateOutcome::InvalidInput => Some(Report {
            severity: Severity::Error,
            message: "No application defined for version check".to_string(),
        }),
    }
}
