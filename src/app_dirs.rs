//! Where `wrz` looks for its configuration file.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

/// Replaces the platform configuration directory when set to a non-empty path.
pub const CONFIG_DIR_ENV: &str = "WRZ_CONFIG_DIR";

/// Name of the default configuration file inside [`config_dir`].
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Directory holding the user configuration file.
pub fn config_dir() -> Result<PathBuf> {
	if let Some(dir) = env::var_os(CONFIG_DIR_ENV).filter(|value| !value.is_empty()) {
		return Ok(PathBuf::from(dir));
	}

	ProjectDirs::from("", "", "wrz")
		.map(|dirs| dirs.config_dir().to_path_buf())
		.ok_or_else(|| anyhow!("no home directory to keep the wrz configuration in"))
}

/// Full path of the user configuration file.
pub fn config_file() -> Result<PathBuf> {
	Ok(config_dir()?.join(CONFIG_FILE_NAME))
}
