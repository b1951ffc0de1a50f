//! HTTP transport for the upstream API
//!
//! The transport performs exactly one GET per call and reports the raw status and body.
//! Classification and retries happen one level up, in [`crate::retry`].

use async_trait::async_trait;
use reqwest::{
	header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION},
	Client,
};
use std::fmt::Debug;
use std::time::Duration;
use tracing::debug;

use fr24_types::{ClientConfig, ClientError, ClientResult};

const USER_AGENT: &str = concat!("fr24-gateway/", env!("CARGO_PKG_VERSION"));

/// Status and body of one upstream response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
	pub status: u16,
	pub body: String,
}

impl RawResponse {
	pub fn new(status: u16, body: impl Into<String>) -> Self {
		Self {
			status,
			body: body.into(),
		}
	}

	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// One authenticated GET against the upstream
///
/// Implementations return `ClientError::Network` when no response was received and a
/// [`RawResponse`] for every status code, successful or not.
#[async_trait]
pub trait HttpTransport: Send + Sync + Debug {
	async fn get(&self, url: &str, query: &[(String, String)]) -> ClientResult<RawResponse>;
}

/// reqwest-backed transport holding the authenticated connection pool
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
	client: Client,
	timeout: Duration,
}

impl ReqwestTransport {
	/// Build the pooled client with the bearer credential baked into its default headers
	pub fn new(config: &ClientConfig) -> ClientResult<Self> {
		let mut headers = HeaderMap::new();
		headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
		headers.insert("Accept-Version", HeaderValue::from_static("v1"));

		let mut auth_value =
			HeaderValue::from_str(&format!("Bearer {}", config.api_key().expose_secret()))
				.map_err(|_| ClientError::Configuration {
					reason: "API credential contains characters not allowed in a header"
						.to_string(),
				})?;
		auth_value.set_sensitive(true);
		headers.insert(AUTHORIZATION, auth_value);

		let client = Client::builder()
			.default_headers(headers)
			.user_agent(USER_AGENT)
			.timeout(config.timeout())
			.build()
			.map_err(|e| ClientError::Configuration {
				reason: format!("Failed to build HTTP client: {}", e),
			})?;

		Ok(Self {
			client,
			timeout: config.timeout(),
		})
	}

	fn describe_failure(&self, error: &reqwest::Error) -> String {
		if error.is_timeout() {
			format!("request timed out after {}ms", self.timeout.as_millis())
		} else if error.is_connect() {
			format!("connection failed: {}", error)
		} else {
			error.to_string()
		}
	}
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
	async fn get(&self, url: &str, query: &[(String, String)]) -> ClientResult<RawResponse> {
		debug!("GET {} with {} query parameter(s)", url, query.len());

		let response = self
			.client
			.get(url)
			.query(query)
			.send()
			.await
			.map_err(|e| ClientError::Network(self.describe_failure(&e)))?;

		let status = response.status().as_u16();
		let body = response
			.text()
			.await
			.map_err(|e| ClientError::Network(self.describe_failure(&e)))?;

		debug!("Upstream responded {} with {} bytes", status, body.len());

		Ok(RawResponse { status, body })
	}
}
