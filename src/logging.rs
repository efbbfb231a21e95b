//! stderr logging for the binary.
//!
//! The engine logs through the `log` facade; the fmt subscriber installed
//! here picks those records up through its `tracing-log` bridge.

use crate::error::{AppError, Result};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Level for `-v` repetitions when `RUST_LOG` is not set.
#[must_use]
pub const fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the verbosity flag.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init(verbosity: u8) -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(level_for(verbosity).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}
