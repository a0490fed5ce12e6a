//! Logging initialization
//!
//! Console report lines are printed directly; tracing events are diagnostics
//! for the operator and go to stderr.

use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

/// Filter level for a `-v` count
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "error",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize tracing; `RUST_LOG` wins over the verbosity flag
pub fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("jobprune={}", log_level(verbose))));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .with_line_number(verbose >= 3)
        .try_init();

    debug!("jobprune started with verbosity level: {}", verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
}
