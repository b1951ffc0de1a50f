//! JSON-RPC 2.0 dispatcher
//!
//! Decodes one JSON-RPC message, routes it to the gateway, and encodes the reply.
//! Tool failures are successful RPC results flagged with `isError`; only protocol
//! faults and resource failures become RPC error objects.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::errors::ServiceError;
use crate::gateway::FlightGateway;
use crate::resources::{resource_templates, JSON_MIME_TYPE};
use crate::tools::tool_catalogue;

pub const JSONRPC_VERSION: &str = "2.0";
pub const PROTOCOL_VERSION: &str = "2024-11-05";
pub const SERVER_NAME: &str = "fr24-gateway";

pub mod codes {
	pub const PARSE_ERROR: i32 = -32700;
	pub const INVALID_REQUEST: i32 = -32600;
	pub const METHOD_NOT_FOUND: i32 = -32601;
	pub const INVALID_PARAMS: i32 = -32602;
	pub const INTERNAL_ERROR: i32 = -32603;
	pub const RESOURCE_NOT_FOUND: i32 = -32002;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcError {
	pub code: i32,
	pub message: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub data: Option<Value>,
}

impl RpcError {
	pub fn new(code: i32, message: impl Into<String>) -> Self {
		Self {
			code,
			message: message.into(),
			data: None,
		}
	}

	pub fn parse_error(message: impl Into<String>) -> Self {
		Self::new(codes::PARSE_ERROR, message)
	}

	fn invalid_request(message: impl Into<String>) -> Self {
		Self::new(codes::INVALID_REQUEST, message)
	}

	fn invalid_params(message: impl Into<String>) -> Self {
		Self::new(codes::INVALID_PARAMS, message)
	}
}

impl From<&ServiceError> for RpcError {
	fn from(err: &ServiceError) -> Self {
		let code = match err {
			ServiceError::InvalidArguments(_) => codes::INVALID_PARAMS,
			ServiceError::UnsupportedResource(_) => codes::RESOURCE_NOT_FOUND,
			e if e.is_caller_error() => codes::RESOURCE_NOT_FOUND,
			_ => codes::INTERNAL_ERROR,
		};
		Self {
			code,
			message: err.to_string(),
			data: Some(err.to_payload()),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RpcResponse {
	pub jsonrpc: &'static str,
	pub id: Value,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub result: Option<Value>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<RpcError>,
}

impl RpcResponse {
	pub fn success(id: Value, result: Value) -> Self {
		Self {
			jsonrpc: JSONRPC_VERSION,
			id,
			result: Some(result),
			error: None,
		}
	}

	pub fn failure(id: Value, error: RpcError) -> Self {
		Self {
			jsonrpc: JSONRPC_VERSION,
			id,
			result: None,
			error: Some(error),
		}
	}
}

#[derive(Debug, Deserialize)]
struct ToolCallParams {
	name: String,
	#[serde(default)]
	arguments: Value,
}

#[derive(Debug, Deserialize)]
struct ResourceReadParams {
	uri: String,
}

/// Validated envelope of an incoming message
struct RpcRequest {
	/// `None` for notifications
	id: Option<Value>,
	method: String,
	params: Value,
}

impl RpcRequest {
	fn decode(message: Value) -> Result<Self, RpcResponse> {
		let Value::Object(mut fields) = message else {
			return Err(RpcResponse::failure(
				Value::Null,
				RpcError::invalid_request("Request must be a JSON object"),
			));
		};

		let id = fields.remove("id");
		let reply_id = id.clone().unwrap_or(Value::Null);

		if let Some(id) = &id {
			if !(id.is_string() || id.is_number() || id.is_null()) {
				return Err(RpcResponse::failure(
					Value::Null,
					RpcError::invalid_request("id must be a string or number"),
				));
			}
		}

		if fields.get("jsonrpc").and_then(Value::as_str) != Some(JSONRPC_VERSION) {
			return Err(RpcResponse::failure(
				reply_id,
				RpcError::invalid_request("jsonrpc must be \"2.0\""),
			));
		}

		let method = match fields.remove("method") {
			Some(Value::String(method)) => method,
			_ => {
				return Err(RpcResponse::failure(
					reply_id,
					RpcError::invalid_request("method must be a string"),
				))
			},
		};

		let params = fields.remove("params").unwrap_or(Value::Null);

		Ok(Self { id, method, params })
	}

	fn params<T: DeserializeOwned>(&self) -> Result<T, RpcError> {
		serde_json::from_value(self.params.clone())
			.map_err(|e| {
				RpcError::invalid_params(format!("Invalid params for {}: {}", self.method, e))
			})
	}
}

#[derive(Debug, Clone)]
pub struct RpcDispatcher {
	gateway: FlightGateway,
}

impl RpcDispatcher {
	pub fn new(gateway: FlightGateway) -> Self {
		Self { gateway }
	}

	pub fn gateway(&self) -> &FlightGateway {
		&self.gateway
	}

	/// Handle one message; `None` means it was a notification and gets no reply
	pub async fn handle(&self, message: Value) -> Option<RpcResponse> {
		let request = match RpcRequest::decode(message) {
			Ok(request) => request,
			Err(response) => return Some(response),
		};

		let Some(id) = request.id.clone() else {
			debug!("Received notification {}", request.method);
			return None;
		};

		debug!("Dispatching {} (id {})", request.method, id);
		let response = match self.dispatch(&request).await {
			Ok(result) => RpcResponse::success(id, result),
			Err(error) => RpcResponse::failure(id, error),
		};
		Some(response)
	}

	async fn dispatch(&self, request: &RpcRequest) -> Result<Value, RpcError> {
		match request.method.as_str() {
			"initialize" => {
				info!("Agent session initialised");
				Ok(json!({
					"protocolVersion": PROTOCOL_VERSION,
					"capabilities": {
						"tools": { "listChanged": false },
						"resources": {},
					},
					"serverInfo": {
						"name": SERVER_NAME,
						"version": env!("CARGO_PKG_VERSION"),
					},
				}))
			},
			"ping" => Ok(json!({})),
			"tools/list" => Ok(json!({ "tools": tool_catalogue() })),
			"tools/call" => {
				let params: ToolCallParams = request.params()?;
				Ok(self.call_tool(&params).await)
			},
			"resources/templates/list" => {
				Ok(json!({ "resourceTemplates": resource_templates() }))
			},
			"resources/read" => {
				let params: ResourceReadParams = request.params()?;
				let value = self
					.gateway
					.read_resource(&params.uri)
					.await
					.map_err(|e| RpcError::from(&e))?;
				Ok(json!({
					"contents": [{
						"uri": params.uri,
						"mimeType": JSON_MIME_TYPE,
						"text": format!("{:#}", value),
					}]
				}))
			},
			other => Err(RpcError::new(
				codes::METHOD_NOT_FOUND,
				format!("Method not found: {}", other),
			)),
		}
	}

	async fn call_tool(&self, params: &ToolCallParams) -> Value {
		let (body, is_error) = match self.gateway.call_tool(&params.name, &params.arguments).await {
			Ok(value) => (value, false),
			Err(e) => (e.to_payload(), true),
		};

		json!({
			"content": [{ "type": "text", "text": format!("{:#}", body) }],
			"isError": is_error,
		})
	}
}
