//! Aircraft records

use serde::{Deserialize, Serialize};

use crate::models::nullable::null_as_default;

/// Individual airframe as returned by the upstream `/aircraft/{registration}` endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AircraftRecord {
	#[serde(default, deserialize_with = "null_as_default")]
	pub registration: String,
	/// ICAO type designator, e.g. `A320`
	#[serde(default, rename = "type")]
	pub type_code: Option<String>,
	#[serde(default)]
	pub manufacturer: Option<String>,
	#[serde(default)]
	pub model: Option<String>,
	#[serde(default)]
	pub owner: Option<String>,
	#[serde(default)]
	pub operator: Option<String>,
	/// Age in years
	#[serde(default)]
	pub age: Option<f64>,
	/// Manufacturer serial number
	#[serde(default)]
	pub msn: Option<String>,
}
