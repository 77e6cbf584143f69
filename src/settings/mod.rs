//! Configuration loading and resolution utilities.
//!
//! [`load`] returns a [`ResolvedConfig`]: the layered result of config files,
//! `WRZ__*` environment variables and CLI flags, validated and with defaults
//! filled in.

mod raw;
mod resolved;
mod sources;
mod util;

use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::CliArgs;
use raw::RawConfig;
pub use resolved::ResolvedConfig;

/// Load the effective configuration for this invocation.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let mut raw: RawConfig = sources::build_config(cli)?
		.try_deserialize()
		.context("configuration files or WRZ__ variables do not match the [api] and [search] sections")?;
	raw.apply_cli_overrides(cli);

	let resolved = raw.resolve(cli)?;
	debug!(
		host = %resolved.host,
		debounce_ms = resolved.debounce.as_millis(),
		"configuration resolved"
	);
	Ok(resolved)
}
