//! Registry trait for fetching package releases from remote sources

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;
use crate::version::types::ReleaseList;

/// Trait for fetching the release list of a package from a registry
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Registry: Send + Sync {
    /// Fetches all published releases for a package
    ///
    /// # Arguments
    /// * `package_name` - The raw package identifier
    ///
    /// # Returns
    /// * `Ok(ReleaseList)` - Releases in publication order, oldest first
    /// * `Err(RegistryError)` - If the fetch fails
    async fn fetch_releases(&self, package_name: &str) -> Result<ReleaseList, RegistryError>;
}
