//! Response envelope unwrapping
//!
//! Every upstream body wraps its payload in `result` (and usually `result.response`).
//! These JSON pointers name the payload location for each endpoint.

use serde::de::DeserializeOwned;
use serde_json::Value;

use fr24_types::{ClientError, ClientResult};

pub const FLIGHT_DETAIL: &str = "/result";
pub const FLIGHTS: &str = "/result/response/flights";
pub const AIRPORT: &str = "/result/response/airport";
pub const AIRPORTS: &str = "/result/response/airports";
pub const AIRLINE: &str = "/result/response/airline";
pub const AIRCRAFT: &str = "/result/response/aircraft";

/// Deserialize the payload at `pointer`, or `None` when it is absent or `null`
///
/// A payload that is present but has the wrong shape is an `InvalidResponse`, not an
/// absence.
pub fn extract<T: DeserializeOwned>(body: &Value, pointer: &str) -> ClientResult<Option<T>> {
	match body.pointer(pointer) {
		None | Some(Value::Null) => Ok(None),
		Some(payload) => T::deserialize(payload)
			.map(Some)
			.map_err(|e| ClientError::InvalidResponse {
				reason: format!("unexpected payload at '{}': {}", pointer, e),
			}),
	}
}

/// Single-entity policy: an absent payload is a `NotFound` for `resource`
pub fn require<T: DeserializeOwned>(
	body: &Value,
	pointer: &str,
	resource: impl FnOnce() -> String,
) -> ClientResult<T> {
	extract(body, pointer)?.ok_or_else(|| ClientError::not_found(resource()))
}

/// Multi-entity policy: an absent payload is an empty result
pub fn list_or_empty<T: DeserializeOwned>(body: &Value, pointer: &str) -> ClientResult<Vec<T>> {
	Ok(extract(body, pointer)?.unwrap_or_default())
}
