//! Configuration settings structures

use std::time::Duration;

use crate::configurable_value::ConfigurableValue;
use fr24_types::constants::{
	DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT_MS,
	DEFAULT_RETRY_INITIAL_DELAY_MS, DEFAULT_RETRY_MAX_ATTEMPTS, DEFAULT_RETRY_MULTIPLIER,
	MAX_RETRY_ATTEMPTS,
};
use fr24_types::{ClientConfig, ClientError, RetryPolicy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main application settings
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
	pub server: ServerSettings,
	pub upstream: UpstreamSettings,
	pub logging: LoggingSettings,
}

/// Server configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
	pub host: String,
	pub port: u16,
}

/// Upstream data API configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UpstreamSettings {
	pub base_url: String,
	pub timeout_ms: u64,
	/// Bearer credential, normally `{"type": "env", "value": "FR24_API_KEY"}`
	pub api_key: ConfigurableValue,
	pub retry: RetrySettings,
}

/// Backoff for rate-limited responses
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct RetrySettings {
	pub initial_delay_ms: u64,
	pub multiplier: u32,
	pub max_attempts: u32,
	/// Cap on the summed backoff of one call; unset means attempts are the only bound
	pub max_total_delay_ms: Option<u64>,
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
	pub structured: bool,
}

/// Log format options
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	Compact,
}

#[derive(Error, Debug)]
pub enum ConfigValidationError {
	#[error("Invalid upstream base URL '{url}': {reason}")]
	InvalidBaseUrl { url: String, reason: String },

	#[error("Upstream timeout must be greater than zero")]
	ZeroTimeout,

	#[error("Retry multiplier must be at least 1, got {0}")]
	InvalidMultiplier(u32),

	#[error("Invalid retry count: {retries} (must be between 0 and {max})")]
	InvalidRetryCount { retries: u32, max: u32 },
}

impl Default for ServerSettings {
	fn default() -> Self {
		Self {
			host: "0.0.0.0".to_string(),
			port: 3000,
		}
	}
}

impl Default for UpstreamSettings {
	fn default() -> Self {
		Self {
			base_url: DEFAULT_BASE_URL.to_string(),
			timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
			api_key: ConfigurableValue::from_env(DEFAULT_API_KEY_ENV),
			retry: RetrySettings::default(),
		}
	}
}

impl Default for RetrySettings {
	fn default() -> Self {
		Self {
			initial_delay_ms: DEFAULT_RETRY_INITIAL_DELAY_MS,
			multiplier: DEFAULT_RETRY_MULTIPLIER,
			max_attempts: DEFAULT_RETRY_MAX_ATTEMPTS,
			max_total_delay_ms: None,
		}
	}
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::Pretty,
			structured: false,
		}
	}
}

impl Settings {
	/// Get server bind address
	pub fn bind_address(&self) -> String {
		format!("{}:{}", self.server.host, self.server.port)
	}

	pub fn validate(&self) -> Result<(), ConfigValidationError> {
		self.upstream.validate()
	}
}

impl UpstreamSettings {
	pub fn validate(&self) -> Result<(), ConfigValidationError> {
		url::Url::parse(&self.base_url).map_err(|e| ConfigValidationError::InvalidBaseUrl {
			url: self.base_url.clone(),
			reason: e.to_string(),
		})?;

		if self.timeout_ms == 0 {
			return Err(ConfigValidationError::ZeroTimeout);
		}

		if self.retry.multiplier == 0 {
			return Err(ConfigValidationError::InvalidMultiplier(self.retry.multiplier));
		}

		if self.retry.max_attempts > MAX_RETRY_ATTEMPTS {
			return Err(ConfigValidationError::InvalidRetryCount {
				retries: self.retry.max_attempts,
				max: MAX_RETRY_ATTEMPTS,
			});
		}

		Ok(())
	}

	/// Resolve the credential and build the immutable client configuration
	///
	/// A missing environment variable and an empty credential are both configuration
	/// errors; the gateway refuses to start without a key.
	pub fn client_config(&self) -> Result<ClientConfig, ClientError> {
		let api_key = self
			.api_key
			.resolve_secret()
			.map_err(|e| ClientError::Configuration {
				reason: format!("{} ({})", e, self.api_key.description()),
			})?;

		Ok(ClientConfig::new(api_key)?
			.with_base_url(self.base_url.clone())
			.with_timeout(Duration::from_millis(self.timeout_ms))
			.with_retry_policy(RetryPolicy::from(&self.retry)))
	}
}

impl From<&RetrySettings> for RetryPolicy {
	fn from(settings: &RetrySettings) -> Self {
		Self {
			initial_delay: Duration::from_millis(settings.initial_delay_ms),
			multiplier: settings.multiplier,
			max_attempts: settings.max_attempts,
			max_total_delay: settings.max_total_delay_ms.map(Duration::from_millis),
		}
	}
}
