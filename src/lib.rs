pub mod config;
pub mod version;

pub use config::CheckerConfig;
pub use version::check_version;
pub use version::checker::UpdateOutcome;
pub use version::report::{Report, Severity, format_outcome};
