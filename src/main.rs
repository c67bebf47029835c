//! Address Book - demonstration entry point
//!
//! Runs a fixed sequence of address book operations and prints the
//! results to stdout. Logs go to stderr.

use address_book::{demo, Config};
use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| Config::default().log_level);

    // RUST_LOG wins over LOG_LEVEL when both are set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            // Configuration only affects logging, so the demo still runs
            warn!("Failed to load configuration, using defaults: {}", e);
            Config::default()
        }
    };
    info!(log_level = %config.log_level, "Starting address book demo");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    demo::run(&mut out)?;

    Ok(())
}
