use thiserror::Error;

#[derive(Debug, Error)]
pub enum VersionParseError {
    #[error("Invalid version: {0}")]
    Invalid(#[from] semver::Error),

    #[error("Build metadata is not supported: {0}")]
    BuildMetadata(String),
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Package not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
