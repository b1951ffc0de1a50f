use axum::{
	http::{StatusCode, Uri},
	response::Json,
};
use serde::Serialize;

/// Error body for requests that never reach the JSON-RPC layer
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
	pub error: String,
	pub message: String,
	pub timestamp: i64,
}

impl ErrorResponse {
	pub fn new(error: &str, message: impl Into<String>) -> Self {
		Self {
			error: error.to_string(),
			message: message.into(),
			timestamp: chrono::Utc::now().timestamp(),
		}
	}
}

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> (StatusCode, Json<ErrorResponse>) {
	(
		StatusCode::NOT_FOUND,
		Json(ErrorResponse::new(
			"NOT_FOUND",
			format!("No route for {}", uri.path()),
		)),
	)
}
