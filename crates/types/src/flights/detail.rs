//! Single-flight detail record

use serde::{Deserialize, Serialize};

/// Full record produced by the flight detail lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightDetail {
	pub identification: FlightIdentification,
	pub status: FlightStatus,
	pub aircraft: AircraftInfo,
	pub airline: AirlineInfo,
	pub origin: Option<AirportInfo>,
	pub destination: Option<AirportInfo>,
	pub times: FlightTimes,
	/// Historical track, oldest first. Empty when upstream sends none.
	pub trail: Vec<TrackPoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightIdentification {
	pub id: String,
	pub callsign: Option<String>,
	pub number: FlightNumber,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightNumber {
	pub default: Option<String>,
	pub alternative: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightStatus {
	pub live: bool,
	pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AircraftInfo {
	pub model_code: Option<String>,
	pub model_text: Option<String>,
	pub registration: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AirlineInfo {
	pub name: Option<String>,
	pub iata: Option<String>,
	pub icao: Option<String>,
}

/// Origin or destination airport as embedded in a flight detail
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AirportInfo {
	pub name: Option<String>,
	pub iata: Option<String>,
	pub icao: Option<String>,
	pub latitude: Option<f64>,
	pub longitude: Option<f64>,
	pub city: Option<String>,
	pub country: Option<String>,
}

/// Departure/arrival pair in unix seconds; either side may be unknown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimePair {
	pub departure: Option<i64>,
	pub arrival: Option<i64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightTimes {
	pub scheduled: TimePair,
	pub actual: TimePair,
	pub estimated: TimePair,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackPoint {
	pub latitude: f64,
	pub longitude: f64,
	pub altitude: i32,
	pub speed: u32,
	pub heading: u32,
	pub timestamp: i64,
}
