//! Error types for upstream data access

use thiserror::Error;

/// Failures surfaced by the transport and domain mapping layers
#[derive(Error, Debug)]
pub enum ClientError {
	#[error("Configuration error: {reason}")]
	Configuration { reason: String },

	#[error("Authentication failed: upstream rejected the API credential")]
	Authentication,

	#[error("Rate limit exceeded after {attempts} attempts")]
	RateLimitExceeded { attempts: u32 },

	#[error("Upstream returned HTTP {status_code}: {body}")]
	Upstream { status_code: u16, body: String },

	#[error("Network error: {0}")]
	Network(String),

	#[error("No data found for {resource}")]
	NotFound { resource: String },

	#[error("Invalid response format: {reason}")]
	InvalidResponse { reason: String },

	#[error("Request cancelled")]
	Cancelled,
}

impl ClientError {
	/// HTTP status associated with the failure, if one was received
	pub fn status_code(&self) -> Option<u16> {
		match self {
			ClientError::Authentication => Some(401),
			ClientError::RateLimitExceeded { .. } => Some(429),
			ClientError::Upstream { status_code, .. } => Some(*status_code),
			_ => None,
		}
	}

	pub fn not_found(resource: impl Into<String>) -> Self {
		Self::NotFound {
			resource: resource.into(),
		}
	}

	/// Caller-correctable conditions, as opposed to transport or upstream faults
	pub fn is_caller_error(&self) -> bool {
		matches!(self, ClientError::NotFound { .. })
	}
}
