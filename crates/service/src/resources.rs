//! Resource addressing
//!
//! URIs such as `airport://LHR` or `zone://52/50/-1/1` parse into [`ResourceUri`],
//! which maps onto the same validated requests the tools use.

use std::fmt;
use std::str::FromStr;

use fr24_types::GeoBounds;
use serde::Serialize;

use crate::errors::ServiceError;
use crate::tools::{
	airline_code, airport_code, flight_id, registration, zone_bounds, ToolRequest,
};

pub const JSON_MIME_TYPE: &str = "application/json";

#[derive(Debug, Clone, PartialEq)]
pub enum ResourceUri {
	Flight(String),
	Airport(String),
	Airline(String),
	Aircraft(String),
	Zone(GeoBounds),
}

impl ResourceUri {
	pub fn into_request(self) -> ToolRequest {
		match self {
			ResourceUri::Flight(flight_id) => ToolRequest::FlightInfo { flight_id },
			ResourceUri::Airport(code) => ToolRequest::AirportInfo { code },
			ResourceUri::Airline(code) => ToolRequest::AirlineInfo { code },
			ResourceUri::Aircraft(registration) => ToolRequest::AircraftInfo { registration },
			ResourceUri::Zone(bounds) => ToolRequest::FlightsInZone(bounds),
		}
	}
}

impl FromStr for ResourceUri {
	type Err = ServiceError;

	fn from_str(uri: &str) -> Result<Self, Self::Err> {
		let unsupported = || ServiceError::UnsupportedResource(uri.to_string());

		let (scheme, body) = uri.split_once("://").ok_or_else(unsupported)?;
		if body.is_empty() {
			return Err(unsupported());
		}

		if scheme == "zone" {
			let parts = body
				.split('/')
				.map(|part| part.parse::<f64>())
				.collect::<Result<Vec<_>, _>>()
				.map_err(|_| unsupported())?;
			let [north, south, west, east] = parts[..] else {
				return Err(unsupported());
			};
			return Ok(ResourceUri::Zone(zone_bounds(north, south, west, east)?));
		}

		if body.contains('/') {
			return Err(unsupported());
		}

		match scheme {
			"flight" => Ok(ResourceUri::Flight(flight_id(body)?)),
			"airport" => Ok(ResourceUri::Airport(airport_code(body)?)),
			"airline" => Ok(ResourceUri::Airline(airline_code(body)?)),
			"aircraft" => Ok(ResourceUri::Aircraft(registration(body)?)),
			_ => Err(unsupported()),
		}
	}
}

impl fmt::Display for ResourceUri {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ResourceUri::Flight(id) => write!(f, "flight://{}", id),
			ResourceUri::Airport(code) => write!(f, "airport://{}", code),
			ResourceUri::Airline(code) => write!(f, "airline://{}", code),
			ResourceUri::Aircraft(registration) => write!(f, "aircraft://{}", registration),
			ResourceUri::Zone(b) => {
				write!(f, "zone://{}/{}/{}/{}", b.north, b.south, b.west, b.east)
			},
		}
	}
}

/// Entry of the `resources/templates/list` result
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceTemplate {
	pub uri_template: &'static str,
	pub name: &'static str,
	pub description: &'static str,
	pub mime_type: &'static str,
}

pub fn resource_templates() -> Vec<ResourceTemplate> {
	let template = |uri_template, name, description| ResourceTemplate {
		uri_template,
		name,
		description,
		mime_type: JSON_MIME_TYPE,
	};

	vec![
		template("flight://{flight_id}", "Flight", "Detailed flight information"),
		template("airport://{code}", "Airport", "Airport by IATA or ICAO code"),
		template("airline://{code}", "Airline", "Airline by IATA or ICAO code"),
		template("aircraft://{registration}", "Aircraft", "Aircraft by registration"),
		template(
			"zone://{north}/{south}/{west}/{east}",
			"Zone",
			"Live flights inside a bounding box",
		),
	]
}
