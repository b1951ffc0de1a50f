//! Airport records and search filters

use serde::{Deserialize, Serialize};

use crate::models::nullable::{null_as_default, rounded_i32};

/// Airport as returned by the upstream `/airports` endpoint
///
/// Field names match the upstream object, so the record deserializes straight out of
/// the response envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AirportRecord {
	#[serde(default, deserialize_with = "null_as_default")]
	pub name: String,
	#[serde(default)]
	pub iata: Option<String>,
	#[serde(default)]
	pub icao: Option<String>,
	#[serde(default)]
	pub latitude: Option<f64>,
	#[serde(default)]
	pub longitude: Option<f64>,
	/// Field elevation in feet, rounded
	#[serde(default, deserialize_with = "rounded_i32")]
	pub altitude: Option<i32>,
	#[serde(default)]
	pub country: Option<String>,
}

/// Filters accepted by the airport search endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirportSearchFilters {
	/// Free-text match on name, city, or code
	pub query: Option<String>,
	/// ISO country code or name
	pub country: Option<String>,
	pub limit: Option<u32>,
}

impl AirportSearchFilters {
	pub fn is_empty(&self) -> bool {
		self.query.is_none() && self.country.is_none()
	}

	pub fn to_query(&self) -> Vec<(String, String)> {
		let mut query = Vec::new();
		if let Some(text) = &self.query {
			query.push(("query".to_string(), text.clone()));
		}
		if let Some(country) = &self.country {
			query.push(("country".to_string(), country.clone()));
		}
		if let Some(limit) = self.limit {
			query.push(("limit".to_string(), limit.to_string()));
		}
		query
	}
}
