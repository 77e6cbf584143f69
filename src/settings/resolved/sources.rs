use std::fmt;

#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) api_token: Option<SettingSource>,
	pub(crate) api_host: Option<SettingSource>,
	pub(crate) debounce: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_token(&self) -> SettingSource {
		self.api_token
			.clone()
			.unwrap_or(SettingSource::ConfigKey("api.token"))
	}

	pub(crate) fn source_for_host(&self) -> SettingSource {
		self.api_host
			.clone()
			.unwrap_or(SettingSource::ConfigKey("api.host"))
	}

	pub(crate) fn source_for_debounce(&self) -> SettingSource {
		self.debounce
			.clone()
			.unwrap_or(SettingSource::ConfigKey("search.debounce_ms"))
	}
}
