//! Update decision engine
//!
//! Decides whether the currently installed version of a package is behind the
//! registry's release list. A stable current version only ever sees stable
//! candidates; a pre-release current version opts into pre-release candidates
//! as well, so pre-release users track their channel without stable users
//! being offered release candidates.

use semver::Version;

use crate::version::semver::is_prerelease;
use crate::version::types::ReleaseList;

/// Result of one version check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Current version is the latest eligible release
    UpToDate(Version),
    /// A newer eligible release exists
    UpdateAvailable { current: Version, latest: Version },
    /// The registry reported no releases (or could not be reached)
    NotFound,
    /// No current version was supplied
    InvalidInput,
}

/// Decide whether an update is available for `current` given the registry's
/// release list.
///
/// The release list is trusted to be in publication order, so the last
/// eligible entry is taken as the latest release instead of recomputing a
/// semantic maximum. The final comparison against `current` is still
/// semantic, so an unsorted list can at worst miss an update, never report
/// a downgrade as one.
pub fn decide(releases: &ReleaseList, current: Option<&Version>) -> UpdateOutcome {
    let Some(current) = current else {
        return UpdateOutcome::InvalidInput;
    };

    if releases.is_empty() {
        return UpdateOutcome::NotFound;
    }

    let including_prereleases = is_prerelease(current);

    let latest = releases
        .versions()
        .iter()
        .filter(|candidate| including_prereleases || !is_prerelease(candidate))
        .next_back()
        // No eligible candidate: nothing newer to offer.
        .unwrap_or(current);

    if current < latest {
        UpdateOutcome::UpdateAvailable {
            current: current.clone(),
            latest: latest.clone(),
        }
    } else {
        UpdateOutcome::UpToDate(current.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::semver::parse_version;
    use rstest::rstest;

    fn releases(versions: &[&str]) -> ReleaseList {
        versions
            .iter()
            .map(|v| parse_version(v).unwrap())
            .collect()
    }

    #[rstest]
    #[case(&["1.0.0", "1.2.0", "2.0.0"], "1.0.0", "2.0.0")]
    #[case(&["1.0.0", "2.0.0-rc1"], "1.0.0-beta", "2.0.0-rc1")] // pre-release current tracks pre-releases
    #[case(&["0.9.0", "1.0.0-rc1", "1.0.0"], "0.9.0", "1.0.0")]
    fn decide_reports_update_when_a_newer_eligible_release_exists(
        #[case] available: &[&str],
        #[case] current: &str,
        #[case] latest: &str,
    ) {
        let current = parse_version(current).unwrap();

        let outcome = decide(&releases(available), Some(&current));

        assert_eq!(
            outcome,
            UpdateOutcome::UpdateAvailable {
                current,
                latest: parse_version(latest).unwrap(),
            }
        );
    }

    #[rstest]
    #[case(&["1.0.0"], "1.0.0")] // equal versions never report an update
    #[case(&["1.0.0", "2.0.0-rc1"], "1.0.0")] // stable current ignores pre-releases
    #[case(&["1.0.0", "1.2.0"], "2.0.0")] // current newer than every release
    #[case(&["1.0.0-rc1", "1.0.0-rc2"], "2.0.0")] // filter leaves no candidate
    fn decide_reports_up_to_date_when_no_newer_eligible_release_exists(
        #[case] available: &[&str],
        #[case] current: &str,
    ) {
        let current = parse_version(current).unwrap();

        let outcome = decide(&releases(available), Some(&current));

        assert_eq!(outcome, UpdateOutcome::UpToDate(current));
    }

    #[test]
    fn decide_returns_not_found_for_empty_release_list() {
        let current = parse_version("1.0.0").unwrap();

        let outcome = decide(&ReleaseList::default(), Some(&current));

        assert_eq!(outcome, UpdateOutcome::NotFound);
    }

    #[test]
    fn decide_returns_invalid_input_without_a_current_version() {
        let outcome = decide(&releases(&["1.0.0"]), None);

        assert_eq!(outcome, UpdateOutcome::InvalidInput);
    }

    #[test]
    fn decide_trusts_publication_order_over_semantic_order() {
        // The registry reports publication order; the last eligible entry wins
        // even when an earlier entry is semantically greater.
        let current = parse_version("1.0.0").unwrap();

        let outcome = decide(&releases(&["2.0.0", "1.5.0"]), Some(&current));

        assert_eq!(
            outcome,
            UpdateOutcome::UpdateAvailable {
                current,
                latest: parse_version("1.5.0").unwrap(),
            }
        );
    }
}
