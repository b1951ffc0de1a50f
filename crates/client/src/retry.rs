//! Transport/retry layer
//!
//! Wraps an [`HttpTransport`] with status classification and exponential backoff.
//! Only HTTP 429 is retried; every other failure is terminal on first sight.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::timer::BackoffTimer;
use crate::transport::{HttpTransport, RawResponse};
use fr24_types::{ClientError, ClientResult, RetryPolicy};

const TOO_MANY_REQUESTS: u16 = 429;
const UNAUTHORIZED: u16 = 401;

/// Transport decorated with rate-limit backoff and optional cancellation
///
/// Holds no per-call state, so one instance serves any number of concurrent calls.
#[derive(Debug, Clone)]
pub struct RetryingTransport {
	transport: Arc<dyn HttpTransport>,
	timer: Arc<dyn BackoffTimer>,
	policy: RetryPolicy,
	cancel: Option<CancellationToken>,
}

impl RetryingTransport {
	pub fn new(
		transport: Arc<dyn HttpTransport>,
		timer: Arc<dyn BackoffTimer>,
		policy: RetryPolicy,
	) -> Self {
		Self {
			transport,
			timer,
			policy,
			cancel: None,
		}
	}

	/// Abort in-flight requests and pending backoff sleeps when `token` is cancelled
	pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
		self.cancel = Some(token);
		self
	}

	pub fn policy(&self) -> &RetryPolicy {
		&self.policy
	}

	/// GET `url` with `query` and parse the JSON body of the first successful response
	pub async fn request(&self, url: &str, query: &[(String, String)]) -> ClientResult<Value> {
		let mut attempt: u32 = 0;
		let mut slept = Duration::ZERO;

		loop {
			let response = self.send(url, query).await?;

			match response.status {
				_ if response.is_success() => return parse_body(&response),
				UNAUTHORIZED => {
					warn!("Upstream rejected credentials for {}", url);
					return Err(ClientError::Authentication);
				},
				TOO_MANY_REQUESTS => {
					let delay = self.policy.delay_for(attempt);
					if !self.policy.allows_retry(attempt) || !self.policy.within_budget(slept, delay)
					{
						warn!(
							"Rate limit persisted for {} after {} attempt(s), giving up",
							url,
							attempt + 1
						);
						return Err(ClientError::RateLimitExceeded {
							attempts: attempt + 1,
						});
					}

					warn!(
						"Rate limited by upstream on {} (attempt {}), retrying in {}ms",
						url,
						attempt + 1,
						delay.as_millis()
					);
					self.pause(delay).await?;
					slept += delay;
					attempt += 1;
				},
				status => {
					warn!("Upstream returned HTTP {} for {}", status, url);
					return Err(ClientError::Upstream {
						status_code: status,
						body: response.body,
					});
				},
			}
		}
	}

	async fn send(&self, url: &str, query: &[(String, String)]) -> ClientResult<RawResponse> {
		match &self.cancel {
			Some(token) => tokio::select! {
				biased;
				_ = token.cancelled() => Err(ClientError::Cancelled),
				result = self.transport.get(url, query) => result,
			},
			None => self.transport.get(url, query).await,
		}
	}

	async fn pause(&self, delay: Duration) -> ClientResult<()> {
		match &self.cancel {
			Some(token) => tokio::select! {
				biased;
				_ = token.cancelled() => {
					debug!("Backoff interrupted by cancellation");
					Err(ClientError::Cancelled)
				},
				_ = self.timer.sleep(delay) => Ok(()),
			},
			None => {
				self.timer.sleep(delay).await;
				Ok(())
			},
		}
	}
}

fn parse_body(response: &RawResponse) -> ClientResult<Value> {
	serde_json::from_str(&response.body).map_err(|e| ClientError::InvalidResponse {
		reason: format!("response body is not valid JSON: {}", e),
	})
}
