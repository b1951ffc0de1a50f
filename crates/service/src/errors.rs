//! Service error taxonomy
//!
//! Every failure the agent can observe carries a stable upper-snake code.

use fr24_types::ClientError;
use serde_json::{json, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
	#[error("Invalid arguments: {0}")]
	InvalidArguments(String),

	#[error("Unknown tool: {0}")]
	UnknownTool(String),

	#[error("Unsupported resource: {0}")]
	UnsupportedResource(String),

	#[error(transparent)]
	Client(#[from] ClientError),
}

impl ServiceError {
	pub fn invalid(message: impl Into<String>) -> Self {
		Self::InvalidArguments(message.into())
	}

	/// Stable code reported to the agent alongside the message
	pub fn error_code(&self) -> &'static str {
		match self {
			ServiceError::InvalidArguments(_) => "INVALID_ARGUMENTS",
			ServiceError::UnknownTool(_) => "UNKNOWN_TOOL",
			ServiceError::UnsupportedResource(_) => "UNSUPPORTED_RESOURCE",
			ServiceError::Client(err) => match err {
				ClientError::Configuration { .. } => "CONFIGURATION_ERROR",
				ClientError::Authentication => "AUTHENTICATION_FAILED",
				ClientError::RateLimitExceeded { .. } => "RATE_LIMIT_EXCEEDED",
				ClientError::Upstream { .. } => "UPSTREAM_ERROR",
				ClientError::Network(_) => "NETWORK_ERROR",
				ClientError::NotFound { .. } => "NOT_FOUND",
				ClientError::InvalidResponse { .. } => "INVALID_RESPONSE",
				ClientError::Cancelled => "CANCELLED",
			},
		}
	}

	/// True when the caller can fix the request, false for upstream or transport faults
	pub fn is_caller_error(&self) -> bool {
		match self {
			ServiceError::Client(err) => err.is_caller_error(),
			_ => true,
		}
	}

	/// `{error, message}` body returned inside a failed tool result
	pub fn to_payload(&self) -> Value {
		json!({
			"error": self.error_code(),
			"message": self.to_string(),
		})
	}
}
