//! Upstream client configuration

use std::time::Duration;

use super::{ClientError, ClientResult};
use crate::constants::{
	DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT_MS, DEFAULT_RETRY_INITIAL_DELAY_MS,
	DEFAULT_RETRY_MAX_ATTEMPTS, DEFAULT_RETRY_MULTIPLIER,
};
use crate::SecretString;

/// Backoff policy for rate-limited (HTTP 429) responses
///
/// Attempt `n` (0-based) waits `initial_delay × multiplier^n` before retrying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
	pub initial_delay: Duration,
	pub multiplier: u32,
	/// Retries allowed after the first request
	pub max_attempts: u32,
	/// Optional ceiling on the summed backoff delay across one call
	pub max_total_delay: Option<Duration>,
}

impl Default for RetryPolicy {
	fn default() -> Self {
		Self {
			initial_delay: Duration::from_millis(DEFAULT_RETRY_INITIAL_DELAY_MS),
			multiplier: DEFAULT_RETRY_MULTIPLIER,
			max_attempts: DEFAULT_RETRY_MAX_ATTEMPTS,
			max_total_delay: None,
		}
	}
}

impl RetryPolicy {
	/// Policy that never retries
	pub fn disabled() -> Self {
		Self {
			max_attempts: 0,
			..Self::default()
		}
	}

	/// Delay before the retry that follows attempt `attempt`
	pub fn delay_for(&self, attempt: u32) -> Duration {
		let factor = self.multiplier.checked_pow(attempt).unwrap_or(u32::MAX);
		self.initial_delay.saturating_mul(factor)
	}

	/// Whether attempt `attempt` may be followed by another try
	pub fn allows_retry(&self, attempt: u32) -> bool {
		attempt < self.max_attempts
	}

	/// Whether sleeping `next` on top of `spent` stays inside the total ceiling
	pub fn within_budget(&self, spent: Duration, next: Duration) -> bool {
		match self.max_total_delay {
			Some(ceiling) => spent.saturating_add(next) <= ceiling,
			None => true,
		}
	}
}

/// Immutable transport configuration for the upstream API
///
/// Construction fails when the credential is empty, so every client holds one.
#[derive(Debug, Clone)]
pub struct ClientConfig {
	base_url: String,
	api_key: SecretString,
	timeout: Duration,
	retry: RetryPolicy,
}

impl ClientConfig {
	/// Create a configuration with the reference defaults (production base address,
	/// 10 s timeout, 1 s/×2/3-attempt backoff)
	pub fn new(api_key: impl Into<SecretString>) -> ClientResult<Self> {
		let api_key = api_key.into();
		if api_key.is_blank() {
			return Err(ClientError::Configuration {
				reason: "API credential is required but was empty".to_string(),
			});
		}

		Ok(Self {
			base_url: DEFAULT_BASE_URL.to_string(),
			api_key,
			timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
			retry: RetryPolicy::default(),
		})
	}

	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into();
		self
	}

	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = timeout;
		self
	}

	pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
		self.retry = retry;
		self
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	pub fn api_key(&self) -> &SecretString {
		&self.api_key
	}

	pub fn timeout(&self) -> Duration {
		self.timeout
	}

	pub fn retry(&self) -> &RetryPolicy {
		&self.retry
	}
}
