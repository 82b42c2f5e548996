//! Hex-style registry client for fetching package release lists

use std::time::Duration;

use reqwest::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::version::error::RegistryError;
use crate::version::registry::Registry;
use crate::version::semver::parse_version;
use crate::version::types::ReleaseList;

/// Default base URL for the packages API
pub const DEFAULT_HEX_REGISTRY: &str = "https://hex.pm/api/packages";

/// Media type requested from the registry
const REGISTRY_MEDIA_TYPE: &str = "application/json";

/// Builds the identification header sent with every lookup:
/// `"<CapitalizedName>/<currentVersion> (rust/<rustVersion>) (<os>/<arch>)"`.
pub fn user_agent(package_name: &str, current: &semver::Version) -> String {
    let mut name = package_name.to_string();
    if let Some(first) = name.get_mut(..1) {
        first.make_ascii_uppercase();
    }
    format!(
        "{}/{} (rust/{}) ({}/{})",
        name,
        current,
        env!("CARGO_PKG_RUST_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH,
    )
}

/// Hex-style registry client
///
/// Performs one outbound request per lookup; no retries, no caching.
pub struct HexRegistry {
    client: Client,
    base_url: String,
}

impl HexRegistry {
    /// Creates a new registry client with a custom base URL and the
    /// identification header built by [`user_agent`].
    pub fn new(base_url: &str, user_agent: &str, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .user_agent(user_agent)
                .timeout(timeout)
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.to_string(),
        }
    }
}

/// Registry API response structure
#[derive(Debug, Deserialize)]
struct HexPackageResponse {
    /// Releases in publication order, oldest first; absent key means none
    #[serde(default)]
    releases: Vec<HexRelease>,
}

#[derive(Debug, Deserialize)]
struct HexRelease {
    version: String,
}

#[async_trait::async_trait]
impl Registry for HexRegistry {
    async fn fetch_releases(&self, package_name: &str) -> Result<ReleaseList, RegistryError> {
        let url = format!("{}/{}", self.base_url, package_name);
        debug!("Fetching package releases: {}", url);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, REGISTRY_MEDIA_TYPE)
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(package_name.to_string()));
        }

        if !status.is_success() {
            warn!("Registry returned status {}: {}", status, url);
            return Err(RegistryError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let package: HexPackageResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse registry response: {}", e);
            RegistryError::InvalidResponse(e.to_string())
        })?;

        // Unparseable entries are dropped; one bad release must not abort the fetch.
        let releases: ReleaseList = package
            .releases
            .into_iter()
            .filter_map(|release| match parse_version(&release.version) {
                Ok(version) => Some(version),
                Err(err) => {
                    debug!("Dropping release with invalid version {:?}: {}", release.version, err);
                    None
                }
            })
            .collect();

        debug!(
            "Found {} releases for package {}",
            releases.len(),
            package_name
        );

        Ok(releases)
    }
}
