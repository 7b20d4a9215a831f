//! Namedays CLI binary.

use anyhow::Result;
use namedays::cli::Cli;
use tracing_subscriber::EnvFilter;

/// Main entry point for the namedays CLI.
fn main() -> Result<()> {
    // Initialize tracing subscriber
    // Can be controlled via RUST_LOG environment variable
    // Example: RUST_LOG=namedays=debug,nameday_format=trace cargo run -- stats
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("namedays=info,nameday_format=info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Starting namedays CLI");

    let cli = Cli::parse_args();
    cli.execute()?;

    tracing::debug!("Namedays CLI completed successfully");
    Ok(())
}
