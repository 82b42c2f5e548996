//! Version checking layer
//!
//! Fetches the release list for a package from a registry, decides whether
//! the installed version is behind, and formats the decision for the caller.
//!
//! # Modules
//!
//! - [`semver`]: version parsing policy and pre-release detection
//! - [`registry`]: trait for fetching release lists from remote sources
//! - [`registries`]: concrete registry implementations
//! - [`checker`]: update decision engine
//! - [`report`]: severity + message formatting
//! - [`types`]: common types like [`types::ReleaseList`]
//! - [`error`]: error types for parsing and registry operations
//!
//! [`check_version`] is the sole entry point: each call is one stateless unit
//! of work (one fetch, one decision) with no shared mutable state, so callers
//! may run checks for multiple packages concurrently.

pub mod checker;
pub mod error;
pub mod registries;
pub mod registry;
pub mod report;
pub mod semver;
pub mod types;

use tracing::debug;

use crate::version::checker::{UpdateOutcome, decide};
use crate::version::registry::Registry;
use crate::version::types::ReleaseList;

/// Check whether `current` is behind the registry's releases for a package.
///
/// Skips the fetch entirely when no current version is known. Any fetch
/// failure degrades to an empty release list and therefore a `NotFound`
/// outcome; a failed check never propagates an error to the caller.
pub async fn check_version(
    registry: &dyn Registry,
    package_name: &str,
    current: Option<&::semver::Version>,
) -> UpdateOutcome {
    let Some(current) = current else {
        return UpdateOutcome::InvalidInput;
    };

    let releases = match registry.fetch_releases(package_name).await {
        Ok(releases) => releases,
        Err(err) => {
            debug!("Version check for {} failed: {}", package_name, err);
            ReleaseList::default()
        }
    };

    decide(&releases, Some(current))
}
