//! Shared semver utilities

use semver::Version;

use crate::version::error::VersionParseError;

/// Parse a version string into a `semver::Version`.
///
/// The expected grammar is `MAJOR.MINOR.PATCH[-PRERELEASE]`. Comparison is
/// the `semver` crate's `Ord`: equal triples rank a pre-release below the
/// plain release, and pre-release identifiers compare element-wise (numeric
/// identifiers numerically, alphanumeric ones lexically, a prefix sequence
/// ranking lower).
///
/// Policy: leading zeros in numeric fields are rejected, and build metadata
/// (`1.0.0+build`) is rejected rather than stripped.
pub fn parse_version(text: &str) -> Result<Version, VersionParseError> {
    if text.contains('+') {
        return Err(VersionParseError::BuildMetadata(text.to_string()));
    }
    Ok(Version::parse(text)?)
}

/// Returns true iff the version carries at least one pre-release identifier.
pub fn is_prerelease(version: &Version) -> bool {
    !version.pre.is_empty()
}
