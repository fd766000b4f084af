// src/log.rs
use tracing_subscriber::{EnvFilter, fmt, fmt::time::Uptime};

use crate::error::{Result, ScrapeError};

/// Install the stderr subscriber. `RUST_LOG` wins when set; otherwise
/// `info`, or `debug` when `verbose`. Fails if a global subscriber is
/// already installed.
pub fn init(verbose: bool) -> Result<()> {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // elapsed run time instead of wall clock
    fmt()
        .with_env_filter(filter)
        .with_timer(Uptime::default())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| ScrapeError::Logging(e.to_string()))
}
