use serde::Deserialize;

use crate::version::registries::hex::DEFAULT_HEX_REGISTRY;

/// Timeout for a registry fetch in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

/// Checker configuration
///
/// The registry base URL is the only tunable the core cares about; the
/// timeout bounds the single outbound fetch so a slow registry can never
/// stall the caller's startup.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckerConfig {
    /// Base URL of the registry's packages API
    pub registry_url: String,
    /// Fetch timeout in milliseconds
    pub fetch_timeout_ms: u64,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            registry_url: DEFAULT_HEX_REGISTRY.to_string(),
            fetch_timeout_ms: FETCH_TIMEOUT_MS,
        }
    }
}
