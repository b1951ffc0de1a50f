//! Airline records

use serde::{Deserialize, Serialize};

use crate::models::nullable::null_as_default;

/// Airline as returned by the upstream `/airlines` endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirlineRecord {
	#[serde(default, deserialize_with = "null_as_default")]
	pub name: String,
	#[serde(default)]
	pub iata: Option<String>,
	#[serde(default)]
	pub icao: Option<String>,
	#[serde(default)]
	pub country: Option<String>,
}
