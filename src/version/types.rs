//! Common types for the version layer

use semver::Version;

/// Versions the registry reports for one package, kept in the registry's
/// native order (ascending by publication, not necessarily semantic order).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseList {
    versions: Vec<Version>,
}

impl ReleaseList {
    pub fn new(versions: Vec<Version>) -> Self {
        Self { versions }
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    /// Versions in publication order.
    pub fn versions(&self) -> &[Version] {
        &self.versions
    }
}

impl FromIterator<Version> for ReleaseList {
    fn from_iter<I: IntoIterator<Item = Version>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
