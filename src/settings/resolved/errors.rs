use thiserror::Error;

use super::SettingSource;

/// Everywhere a token can be supplied, highest precedence first.
const TOKEN_LOCATIONS: &str = "--token, WRIKE_TOKEN, WRZ__API__TOKEN or api.token";

/// A setting that cannot be used to talk to Wrike.
///
/// Token errors never carry the token itself.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
	#[error("a Wrike API token is required (api.token); set one with {}", TOKEN_LOCATIONS)]
	MissingToken,

	#[error("invalid value for {key} from {origin}: {reason} (value: {value})")]
	Invalid {
		key: &'static str,
		value: String,
		origin: SettingSource,
		reason: String,
	},
}

impl ConfigError {
	pub(crate) fn invalid(
		key: &'static str,
		value: impl Into<String>,
		origin: SettingSource,
		reason: impl Into<String>,
	) -> Self {
		Self::Invalid {
			key,
			value: value.into(),
			origin,
			reason: reason.into(),
		}
	}
}
