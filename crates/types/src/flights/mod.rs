//! Flight domain records
//!
//! Two shapes exist: [`FlightSummary`] for list results (search and zone queries)
//! and [`FlightDetail`] for single-flight lookups.

pub mod detail;
pub mod filters;

pub use detail::{
	AircraftInfo, AirlineInfo, AirportInfo, FlightDetail, FlightIdentification, FlightNumber,
	FlightStatus, FlightTimes, TimePair, TrackPoint,
};
pub use filters::FlightSearchFilters;

use serde::{Deserialize, Serialize};

/// Geographic position of an aircraft
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
	pub latitude: f64,
	pub longitude: f64,
	/// Barometric altitude in feet
	pub altitude: i32,
}

/// Ground speed (knots) and track (degrees)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
	pub speed: u32,
	pub heading: u32,
}

/// One live flight as returned by search and zone queries
///
/// There is no cross-call identity: `id` + `timestamp` identify the record only within
/// the response it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightSummary {
	pub id: String,
	pub callsign: Option<String>,
	pub airline_code: Option<String>,
	pub position: Position,
	pub velocity: Velocity,
	pub aircraft_type: Option<String>,
	pub registration: Option<String>,
	pub origin: Option<String>,
	pub destination: Option<String>,
	pub status: Option<String>,
	/// Unix seconds of the last position report
	pub timestamp: i64,
}
