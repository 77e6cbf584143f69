use std::time::Duration;

use url::Url;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub token: String,
	pub host: Url,
	pub initial_query: String,
	pub debounce: Duration,
}

impl ResolvedConfig {
	pub(super) fn from_parts(
		token: Option<String>,
		host: Option<String>,
		initial_query: String,
		debounce_ms: Option<u64>,
		sources: &ConfigSources,
	) -> Result<Self, ConfigError> {
		Ok(Self {
			token: validation::token(token, sources)?,
			host: validation::host(host, sources)?,
			initial_query,
			debounce: validation::debounce(debounce_ms, sources)?,
		})
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
