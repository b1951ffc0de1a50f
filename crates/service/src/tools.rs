//! Tool catalogue and argument validation
//!
//! Raw agent arguments are checked and normalised here, so the client only ever
//! receives well-formed codes, filters, and bounds.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use fr24_types::constants::{DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT};
use fr24_types::{AirportSearchFilters, FlightSearchFilters, GeoBounds};
use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::errors::ServiceError;

const AIRPORT_CODE_LENGTHS: RangeInclusive<usize> = 3..=4;
const AIRLINE_CODE_LENGTHS: RangeInclusive<usize> = 2..=3;

/// The seven tools exposed to the agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
	GetFlightInfo,
	SearchFlights,
	GetAirportInfo,
	SearchAirports,
	GetAirlineInfo,
	GetAircraftInfo,
	GetFlightsInZone,
}

impl ToolName {
	pub const ALL: [ToolName; 7] = [
		ToolName::GetFlightInfo,
		ToolName::SearchFlights,
		ToolName::GetAirportInfo,
		ToolName::SearchAirports,
		ToolName::GetAirlineInfo,
		ToolName::GetAircraftInfo,
		ToolName::GetFlightsInZone,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			ToolName::GetFlightInfo => "get_flight_info",
			ToolName::SearchFlights => "search_flights",
			ToolName::GetAirportInfo => "get_airport_info",
			ToolName::SearchAirports => "search_airports",
			ToolName::GetAirlineInfo => "get_airline_info",
			ToolName::GetAircraftInfo => "get_aircraft_info",
			ToolName::GetFlightsInZone => "get_flights_in_zone",
		}
	}

	pub fn description(&self) -> &'static str {
		match self {
			ToolName::GetFlightInfo => {
				"Get detailed information about a specific flight, including route, times, and track"
			},
			ToolName::SearchFlights => {
				"Search live flights by flight number, airline, airport, registration, or aircraft type"
			},
			ToolName::GetAirportInfo => "Get information about an airport by IATA or ICAO code",
			ToolName::SearchAirports => "Search airports by name, city, code, or country",
			ToolName::GetAirlineInfo => "Get information about an airline by IATA or ICAO code",
			ToolName::GetAircraftInfo => "Get information about an aircraft by registration",
			ToolName::GetFlightsInZone => {
				"Get all flights currently inside a latitude/longitude bounding box"
			},
		}
	}

	/// JSON Schema for the tool's `arguments` object
	pub fn input_schema(&self) -> Value {
		match self {
			ToolName::GetFlightInfo => object_schema(
				json!({ "flight_id": string_schema("Flightradar24 flight identifier") }),
				&["flight_id"],
			),
			ToolName::SearchFlights => object_schema(
				json!({
					"flight_iata": string_schema("Flight number, IATA format (e.g. BA123)"),
					"flight_icao": string_schema("Flight number, ICAO format (e.g. BAW123)"),
					"airline_iata": string_schema("Airline IATA code"),
					"airline_icao": string_schema("Airline ICAO code"),
					"airport_iata": string_schema("Departure or arrival airport IATA code"),
					"airport_icao": string_schema("Departure or arrival airport ICAO code"),
					"registration": string_schema("Aircraft registration"),
					"aircraft_type": string_schema("Aircraft ICAO type designator (e.g. A320)"),
					"limit": limit_schema(),
				}),
				&[],
			),
			ToolName::GetAirportInfo => object_schema(
				json!({ "code": code_schema("Airport IATA (3) or ICAO (4) code", &AIRPORT_CODE_LENGTHS) }),
				&["code"],
			),
			ToolName::SearchAirports => object_schema(
				json!({
					"query": string_schema("Name, city, or code to match"),
					"country": string_schema("Country name or ISO code"),
					"limit": limit_schema(),
				}),
				&[],
			),
			ToolName::GetAirlineInfo => object_schema(
				json!({ "code": code_schema("Airline IATA (2) or ICAO (3) code", &AIRLINE_CODE_LENGTHS) }),
				&["code"],
			),
			ToolName::GetAircraftInfo => object_schema(
				json!({ "registration": string_schema("Aircraft registration (e.g. G-EUUA)") }),
				&["registration"],
			),
			ToolName::GetFlightsInZone => object_schema(
				json!({
					"north": coordinate_schema("Northern latitude", 90.0),
					"south": coordinate_schema("Southern latitude", 90.0),
					"west": coordinate_schema("Western longitude", 180.0),
					"east": coordinate_schema("Eastern longitude", 180.0),
				}),
				&["north", "south", "west", "east"],
			),
		}
	}

	pub fn descriptor(&self) -> ToolDescriptor {
		ToolDescriptor {
			name: self.as_str(),
			description: self.description(),
			input_schema: self.input_schema(),
		}
	}
}

impl fmt::Display for ToolName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for ToolName {
	type Err = ServiceError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		ToolName::ALL
			.into_iter()
			.find(|tool| tool.as_str() == s)
			.ok_or_else(|| ServiceError::UnknownTool(s.to_string()))
	}
}

/// Entry of the `tools/list` result
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
	pub name: &'static str,
	pub description: &'static str,
	pub input_schema: Value,
}

pub fn tool_catalogue() -> Vec<ToolDescriptor> {
	ToolName::ALL.iter().map(ToolName::descriptor).collect()
}

/// A validated call, ready to hand to the provider
#[derive(Debug, Clone, PartialEq)]
pub enum ToolRequest {
	FlightInfo { flight_id: String },
	SearchFlights(FlightSearchFilters),
	AirportInfo { code: String },
	SearchAirports(AirportSearchFilters),
	AirlineInfo { code: String },
	AircraftInfo { registration: String },
	FlightsInZone(GeoBounds),
}

impl ToolRequest {
	/// Validate `arguments` for the tool called `name`
	pub fn parse(name: &str, arguments: &Value) -> Result<Self, ServiceError> {
		let tool: ToolName = name.parse()?;
		let args = Arguments::from_value(arguments)?;

		match tool {
			ToolName::GetFlightInfo => Ok(ToolRequest::FlightInfo {
				flight_id: flight_id(&args.required_string("flight_id")?)?,
			}),
			ToolName::SearchFlights => {
				let filters = FlightSearchFilters {
					flight_iata: args.code_filter("flight_iata")?,
					flight_icao: args.code_filter("flight_icao")?,
					airline_iata: args.code_filter("airline_iata")?,
					airline_icao: args.code_filter("airline_icao")?,
					airport_iata: args.code_filter("airport_iata")?,
					airport_icao: args.code_filter("airport_icao")?,
					registration: args.code_filter("registration")?,
					aircraft_type: args.code_filter("aircraft_type")?,
					limit: Some(args.limit()?),
				};
				if filters.is_empty() {
					return Err(ServiceError::invalid(
						"at least one search filter is required",
					));
				}
				Ok(ToolRequest::SearchFlights(filters))
			},
			ToolName::GetAirportInfo => Ok(ToolRequest::AirportInfo {
				code: airport_code(&args.required_string("code")?)?,
			}),
			ToolName::SearchAirports => {
				let filters = AirportSearchFilters {
					query: args.string("query")?,
					country: args.string("country")?,
					limit: Some(args.limit()?),
				};
				if filters.is_empty() {
					return Err(ServiceError::invalid("query or country is required"));
				}
				Ok(ToolRequest::SearchAirports(filters))
			},
			ToolName::GetAirlineInfo => Ok(ToolRequest::AirlineInfo {
				code: airline_code(&args.required_string("code")?)?,
			}),
			ToolName::GetAircraftInfo => Ok(ToolRequest::AircraftInfo {
				registration: registration(&args.required_string("registration")?)?,
			}),
			ToolName::GetFlightsInZone => Ok(ToolRequest::FlightsInZone(zone_bounds(
				args.number("north")?,
				args.number("south")?,
				args.number("west")?,
				args.number("east")?,
			)?)),
		}
	}

	pub fn tool(&self) -> ToolName {
		match self {
			ToolRequest::FlightInfo { .. } => ToolName::GetFlightInfo,
			ToolRequest::SearchFlights(_) => ToolName::SearchFlights,
			ToolRequest::AirportInfo { .. } => ToolName::GetAirportInfo,
			ToolRequest::SearchAirports(_) => ToolName::SearchAirports,
			ToolRequest::AirlineInfo { .. } => ToolName::GetAirlineInfo,
			ToolRequest::AircraftInfo { .. } => ToolName::GetAircraftInfo,
			ToolRequest::FlightsInZone(_) => ToolName::GetFlightsInZone,
		}
	}
}

/// Trimmed, upper-cased airport code of 3 or 4 alphanumeric characters
pub fn airport_code(raw: &str) -> Result<String, ServiceError> {
	normalize_code(raw, &AIRPORT_CODE_LENGTHS, "airport code")
}

/// Trimmed, upper-cased airline code of 2 or 3 alphanumeric characters
pub fn airline_code(raw: &str) -> Result<String, ServiceError> {
	normalize_code(raw, &AIRLINE_CODE_LENGTHS, "airline code")
}

/// Trimmed, non-empty alphanumeric flight identifier
pub fn flight_id(raw: &str) -> Result<String, ServiceError> {
	let id = raw.trim();
	if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric()) {
		return Err(ServiceError::invalid(format!(
			"flight_id must be a non-empty alphanumeric identifier, got '{}'",
			raw
		)));
	}
	Ok(id.to_string())
}

pub fn registration(raw: &str) -> Result<String, ServiceError> {
	let registration = raw.trim().to_uppercase();
	if registration.is_empty() {
		return Err(ServiceError::invalid("registration must not be empty"));
	}
	Ok(registration)
}

pub fn zone_bounds(north: f64, south: f64, west: f64, east: f64) -> Result<GeoBounds, ServiceError> {
	GeoBounds::new(north, south, west, east).map_err(|e| ServiceError::invalid(e.to_string()))
}

fn normalize_code(
	raw: &str,
	lengths: &RangeInclusive<usize>,
	label: &str,
) -> Result<String, ServiceError> {
	let code = raw.trim().to_uppercase();
	let valid = lengths.contains(&code.chars().count())
		&& code.chars().all(|c| c.is_ascii_alphanumeric());

	if !valid {
		return Err(ServiceError::invalid(format!(
			"{} must be {} or {} alphanumeric characters, got '{}'",
			label,
			lengths.start(),
			lengths.end(),
			raw
		)));
	}
	Ok(code)
}

/// Typed accessors over a tool's `arguments` object
struct Arguments {
	map: Map<String, Value>,
}

impl Arguments {
	fn from_value(value: &Value) -> Result<Self, ServiceError> {
		match value {
			Value::Object(map) => Ok(Self { map: map.clone() }),
			Value::Null => Ok(Self { map: Map::new() }),
			_ => Err(ServiceError::invalid("arguments must be an object")),
		}
	}

	/// Trimmed string value; blank counts as absent
	fn string(&self, key: &str) -> Result<Option<String>, ServiceError> {
		match self.map.get(key) {
			None | Some(Value::Null) => Ok(None),
			Some(Value::String(s)) => {
				let trimmed = s.trim();
				Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
			},
			Some(_) => Err(ServiceError::invalid(format!("{} must be a string", key))),
		}
	}

	fn required_string(&self, key: &str) -> Result<String, ServiceError> {
		self.string(key)?
			.ok_or_else(|| ServiceError::invalid(format!("{} is required", key)))
	}

	fn code_filter(&self, key: &str) -> Result<Option<String>, ServiceError> {
		Ok(self.string(key)?.map(|s| s.to_uppercase()))
	}

	fn number(&self, key: &str) -> Result<f64, ServiceError> {
		match self.map.get(key) {
			None | Some(Value::Null) => Err(ServiceError::invalid(format!("{} is required", key))),
			Some(value) => value
				.as_f64()
				.ok_or_else(|| ServiceError::invalid(format!("{} must be a number", key))),
		}
	}

	fn limit(&self) -> Result<u32, ServiceError> {
		let value = match self.map.get("limit") {
			None | Some(Value::Null) => return Ok(DEFAULT_SEARCH_LIMIT),
			Some(value) => value,
		};

		value
			.as_u64()
			.filter(|limit| (1..=u64::from(MAX_SEARCH_LIMIT)).contains(limit))
			.map(|limit| limit as u32)
			.ok_or_else(|| {
				ServiceError::invalid(format!(
					"limit must be an integer between 1 and {}",
					MAX_SEARCH_LIMIT
				))
			})
	}
}

fn object_schema(properties: Value, required: &[&str]) -> Value {
	json!({
		"type": "object",
		"properties": properties,
		"required": required,
		"additionalProperties": false,
	})
}

fn string_schema(description: &str) -> Value {
	json!({ "type": "string", "description": description })
}

fn code_schema(description: &str, lengths: &RangeInclusive<usize>) -> Value {
	json!({
		"type": "string",
		"description": description,
		"minLength": lengths.start(),
		"maxLength": lengths.end(),
	})
}

fn coordinate_schema(description: &str, limit: f64) -> Value {
	json!({
		"type": "number",
		"description": description,
		"minimum": -limit,
		"maximum": limit,
	})
}

fn limit_schema() -> Value {
	json!({
		"type": "integer",
		"description": "Maximum number of results",
		"minimum": 1,
		"maximum": MAX_SEARCH_LIMIT,
		"default": DEFAULT_SEARCH_LIMIT,
	})
}
