//! Configuration loading utilities

use crate::settings::ConfigValidationError;
use crate::Settings;
use config::{Config, ConfigError, Environment, File};
use thiserror::Error;

/// Default configuration file, extension resolved by the `config` crate
pub const DEFAULT_CONFIG_PATH: &str = "config/config";

/// Prefix of environment overrides, e.g. `FR24_GATEWAY__SERVER__PORT=8080`
pub const ENV_PREFIX: &str = "FR24_GATEWAY";

#[derive(Error, Debug)]
pub enum ConfigLoadError {
	#[error("Failed to read configuration: {0}")]
	Source(#[from] ConfigError),

	#[error("Invalid configuration: {0}")]
	Validation(#[from] ConfigValidationError),
}

/// Load configuration from the default file plus environment overrides
pub fn load_config() -> Result<Settings, ConfigLoadError> {
	load_config_from(DEFAULT_CONFIG_PATH)
}

/// Load configuration from `path` (optional) plus environment overrides
pub fn load_config_from(path: &str) -> Result<Settings, ConfigLoadError> {
	let builder = Config::builder()
		.add_source(File::with_name(path).required(false))
		.add_source(
			Environment::with_prefix(ENV_PREFIX)
				.separator("__")
				.try_parsing(true),
		);

	let settings: Settings = builder.build()?.try_deserialize()?;
	settings.validate()?;
	Ok(settings)
}
