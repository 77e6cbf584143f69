use serde::Deserialize;

use crate::cli::CliArgs;

/// `[search]` section: what to search for on start and how to pace input.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SearchSection {
	pub(super) initial_query: Option<String>,
	pub(super) debounce_ms: Option<u64>,
}

impl SearchSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(query) = cli.query.clone() {
			self.initial_query = Some(query);
		}
		if let Some(debounce) = cli.debounce_ms {
			self.debounce_ms = Some(debounce);
		}
	}
}
