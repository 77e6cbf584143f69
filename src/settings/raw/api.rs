use serde::Deserialize;

use crate::cli::CliArgs;

/// `[api]` section: where to send requests and how to authenticate.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ApiSection {
	pub(super) token: Option<String>,
	pub(super) host: Option<String>,
}

impl ApiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(token) = cli.token.clone() {
			self.token = Some(token);
		}
		if let Some(host) = cli.host.clone() {
			self.host = Some(host);
		}
	}
}
