//! Diagnostic logging. Everything goes to stderr so that stdout stays usable
//! for plain and JSON output.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "WRZ_LOG";

/// Pick the filter: `WRZ_LOG` when set, otherwise `warn`, or `debug` for
/// the crate when `verbose` is requested.
pub fn filter(verbose: bool) -> EnvFilter {
	if verbose {
		return EnvFilter::new("warn,wrz=debug");
	}
	EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn initialize(verbose: bool) {
	let _ = tracing_subscriber::registry()
		.with(filter(verbose))
		.with(fmt::layer().with_writer(std::io::stderr).with_target(false))
		.try_init();
}
