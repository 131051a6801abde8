use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber writing to stderr, so stdout only carries
/// the partition report.
///
/// `RUST_LOG` takes precedence over `verbose`: 0 logs warnings, 1 adds info
/// and 2 or more adds debug output including the lookahead windows.
pub fn init_tracing(verbose: u8) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("lineshard={}", level(verbose))));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow!("Failed to initialize logging: {error}"))
}

fn level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}
