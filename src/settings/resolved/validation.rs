use std::time::Duration;

use url::Url;
use wrz::DEFAULT_HOST;

use super::{ConfigError, ConfigSources};

/// Longest accepted debounce; anything above feels like a hang.
const MAX_DEBOUNCE_MS: u64 = 5_000;

pub(super) fn token(value: Option<String>, sources: &ConfigSources) -> Result<String, ConfigError> {
	let Some(value) = value else {
		return Err(ConfigError::MissingToken);
	};

	let trimmed = value.trim();
	if trimmed.is_empty() {
		return Err(ConfigError::invalid(
			"api.token",
			"(blank)",
			sources.source_for_token(),
			"must not be blank",
		));
	}

	Ok(trimmed.to_string())
}

pub(super) fn host(value: Option<String>, sources: &ConfigSources) -> Result<Url, ConfigError> {
	let raw = value.unwrap_or_else(|| DEFAULT_HOST.to_string());
	let invalid = |reason: String| {
		ConfigError::invalid("api.host", raw.clone(), sources.source_for_host(), reason)
	};

	let url = Url::parse(raw.trim()).map_err(|err| invalid(format!("not a valid URL ({err})")))?;
	if !matches!(url.scheme(), "http" | "https") {
		return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
	}
	if url.host_str().is_none() {
		return Err(invalid("missing host name".to_string()));
	}

	Ok(url)
}

pub(super) fn debounce(value: Option<u64>, sources: &ConfigSources) -> Result<Duration, ConfigError> {
	let millis = value.unwrap_or(0);
	if millis > MAX_DEBOUNCE_MS {
		return Err(ConfigError::invalid(
			"search.debounce_ms",
			millis.to_string(),
			sources.source_for_debounce(),
			format!("must be at most {MAX_DEBOUNCE_MS}"),
		));
	}
	Ok(Duration::from_millis(millis))
}
