use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod api;
mod search;

use api::ApiSection;
use search::SearchSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    api: ApiSection,
    search: SearchSection,
}

impl RawConfig {
    /// Apply CLI overrides on top of the raw configuration values.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        self.api.apply_cli_overrides(cli);
        self.search.apply_cli_overrides(cli);
    }

    /// Convert the raw configuration into a [`ResolvedConfig`], validating and
    /// filling defaults where required.
    pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
        let sources = ConfigSources {
            api_token: detect_source(
                cli.token.is_some(),
                self.api.token.is_some(),
                "WRZ__API__TOKEN",
                "--token",
                "api.token",
            ),
            api_host: detect_source(
                cli.host.is_some(),
                self.api.host.is_some(),
                "WRZ__API__HOST",
                "--host",
                "api.host",
            ),
            debounce: detect_source(
                cli.debounce_ms.is_some(),
                self.search.debounce_ms.is_some(),
                "WRZ__SEARCH__DEBOUNCE_MS",
                "--debounce-ms",
                "search.debounce_ms",
            ),
        };

        ResolvedConfig::from_parts(
            self.api.token,
            self.api.host,
            self.search.initial_query.unwrap_or_default(),
            self.search.debounce_ms,
            &sources,
        )
        .map_err(Error::new)
    }
}

fn detect_source(
    cli_present: bool,
    value_present: bool,
    env_var: &'static str,
    cli_flag: &'static str,
    key: &'static str,
) -> Option<SettingSource> {
    if !value_present {
        return None;
    }

    if cli_present {
        return Some(SettingSource::CliFlag(cli_flag));
    }

    if env::var_os(env_var).is_some() {
        return Some(SettingSource::Environment(env_var));
    }

    Some(SettingSource::ConfigKey(key))
}
