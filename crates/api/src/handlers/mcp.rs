//! JSON-RPC endpoint
use axum::{
	body::Bytes,
	extract::State,
	http::StatusCode,
	response::{IntoResponse, Json, Response},
};
use fr24_service::{RpcError, RpcResponse};
use serde_json::Value;
use tracing::debug;

use crate::state::AppState;

/// POST /mcp - Handle one JSON-RPC 2.0 message
///
/// Requests answer 200 with a JSON-RPC response; notifications answer 202 with no body.
pub async fn post_mcp(State(state): State<AppState>, body: Bytes) -> Response {
	let message: Value = match serde_json::from_slice(&body) {
		Ok(message) => message,
		Err(e) => {
			debug!("Rejected unparseable JSON-RPC body: {}", e);
			let error = RpcError::parse_error(format!("Parse error: {}", e));
			return Json(RpcResponse::failure(Value::Null, error)).into_response();
		},
	};

	match state.dispatcher.handle(message).await {
		Some(response) => Json(response).into_response(),
		None => StatusCode::ACCEPTED.into_response(),
	}
}
