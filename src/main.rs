use clap::Parser;
use std::time::Duration;
use tracing::{debug, error, warn};
use tracing_subscriber::EnvFilter;

use update_check::config::{CheckerConfig, FETCH_TIMEOUT_MS};
use update_check::version::check_version;
use update_check::version::registries::hex::{HexRegistry, user_agent};
use update_check::version::report::{Severity, format_outcome};
use update_check::version::semver::parse_version;

#[derive(Parser)]
#[command(name = "update-check")]
#[command(version, about = "Check a package against its registry for newer releases")]
struct Cli {
    /// Package name to look up in the registry
    package: String,

    /// Currently installed version
    #[arg(long)]
    current: Option<String>,

    /// Base URL of the registry's packages API
    #[arg(long)]
    registry_url: Option<String>,

    /// Fetch timeout in milliseconds
    #[arg(long, default_value_t = FETCH_TIMEOUT_MS)]
    timeout_ms: u64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = CheckerConfig::default();
    if let Some(registry_url) = cli.registry_url {
        config.registry_url = registry_url;
    }
    config.fetch_timeout_ms = cli.timeout_ms;

    // A current version that fails to parse is treated as absent, which
    // surfaces as the InvalidInput outcome rather than an error.
    let current = cli.current.as_deref().and_then(|text| {
        parse_version(text)
            .inspect_err(|err| debug!("Ignoring unparseable current version {:?}: {}", text, err))
            .ok()
    });

    let outcome = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let agent = match &current {
                Some(version) => user_agent(&cli.package, version),
                None => format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            };
            let registry = HexRegistry::new(
                &config.registry_url,
                &agent,
                Duration::from_millis(config.fetch_timeout_ms),
            );
            check_version(&registry, &cli.package, current.as_ref()).await
        });

    if let Some(report) = format_outcome(&outcome, &cli.package) {
        match report.severity {
            Severity::Warning => warn!("{}", report.message),
            Severity::Debug => debug!("{}", report.message),
            Severity::Error => error!("{}", report.message),
        }
    }

    // A version check never fails the caller, whatever the outcome.
    Ok(())
}
