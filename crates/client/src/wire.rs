//! Upstream wire models for the flight endpoints
//!
//! Airport, airline, and aircraft payloads deserialize directly into their domain
//! records. Flight payloads are flat (list endpoints) or deeply nested (detail endpoint)
//! and are converted here.

use serde::Deserialize;

use fr24_types::models::nullable::null_as_default;
use fr24_types::{
	AircraftInfo, AirlineInfo, AirportInfo, FlightDetail, FlightIdentification, FlightNumber,
	FlightStatus, FlightSummary, FlightTimes, Position, TimePair, TrackPoint, Velocity,
};

/// One entry of `result.response.flights`
#[derive(Debug, Deserialize)]
pub(crate) struct WireFlight {
	#[serde(default, deserialize_with = "null_as_default")]
	id: String,
	callsign: Option<String>,
	airline: Option<String>,
	#[serde(default, deserialize_with = "null_as_default")]
	lat: f64,
	#[serde(default, deserialize_with = "null_as_default")]
	lng: f64,
	#[serde(default, deserialize_with = "null_as_default")]
	alt: f64,
	#[serde(default, deserialize_with = "null_as_default")]
	speed: f64,
	#[serde(default, deserialize_with = "null_as_default")]
	heading: f64,
	aircraft_type: Option<String>,
	registration: Option<String>,
	origin: Option<String>,
	destination: Option<String>,
	status: Option<String>,
	#[serde(default, deserialize_with = "null_as_default")]
	timestamp: i64,
}

impl From<WireFlight> for FlightSummary {
	fn from(wire: WireFlight) -> Self {
		Self {
			id: wire.id,
			callsign: non_empty(wire.callsign),
			airline_code: non_empty(wire.airline),
			position: Position {
				latitude: wire.lat,
				longitude: wire.lng,
				altitude: wire.alt.round() as i32,
			},
			velocity: Velocity {
				speed: unsigned(wire.speed),
				heading: unsigned(wire.heading),
			},
			aircraft_type: non_empty(wire.aircraft_type),
			registration: non_empty(wire.registration),
			origin: non_empty(wire.origin),
			destination: non_empty(wire.destination),
			status: non_empty(wire.status),
			timestamp: wire.timestamp,
		}
	}
}

/// The `result` object of `/flight/info/{id}`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct WireFlightDetail {
	#[serde(deserialize_with = "null_as_default")]
	identification: WireIdentification,
	#[serde(deserialize_with = "null_as_default")]
	status: WireStatus,
	#[serde(deserialize_with = "null_as_default")]
	aircraft: WireAircraft,
	#[serde(deserialize_with = "null_as_default")]
	airline: WireAirline,
	#[serde(deserialize_with = "null_as_default")]
	airport: WireAirportPair,
	#[serde(deserialize_with = "null_as_default")]
	time: WireTimes,
	trail: Option<Vec<WireTrackPoint>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireIdentification {
	id: Option<String>,
	callsign: Option<String>,
	#[serde(deserialize_with = "null_as_default")]
	number: WireFlightNumber,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireFlightNumber {
	default: Option<String>,
	alternative: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireStatus {
	#[serde(deserialize_with = "null_as_default")]
	live: bool,
	text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireAircraft {
	#[serde(deserialize_with = "null_as_default")]
	model: WireCodeText,
	registration: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireCodeText {
	code: Option<String>,
	text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireAirline {
	name: Option<String>,
	#[serde(deserialize_with = "null_as_default")]
	code: WireCodes,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireCodes {
	iata: Option<String>,
	icao: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireAirportPair {
	origin: Option<WireAirport>,
	destination: Option<WireAirport>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireAirport {
	name: Option<String>,
	#[serde(deserialize_with = "null_as_default")]
	code: WireCodes,
	#[serde(deserialize_with = "null_as_default")]
	position: WireAirportPosition,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireAirportPosition {
	latitude: Option<f64>,
	longitude: Option<f64>,
	#[serde(deserialize_with = "null_as_default")]
	country: WireNamed,
	#[serde(deserialize_with = "null_as_default")]
	region: WireRegion,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireNamed {
	name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireRegion {
	city: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireTimes {
	#[serde(deserialize_with = "null_as_default")]
	scheduled: WireTimePair,
	#[serde(deserialize_with = "null_as_default")]
	real: WireTimePair,
	#[serde(deserialize_with = "null_as_default")]
	estimated: WireTimePair,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireTimePair {
	departure: Option<i64>,
	arrival: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct WireTrackPoint {
	lat: f64,
	lng: f64,
	#[serde(default, deserialize_with = "null_as_default")]
	alt: f64,
	#[serde(default, deserialize_with = "null_as_default")]
	spd: f64,
	#[serde(default, deserialize_with = "null_as_default")]
	hd: f64,
	ts: i64,
}

impl WireFlightDetail {
	/// Convert to the domain record; `requested_id` fills in a missing identification id
	pub(crate) fn into_detail(self, requested_id: &str) -> FlightDetail {
		let identification = FlightIdentification {
			id: non_empty(self.identification.id).unwrap_or_else(|| requested_id.to_string()),
			callsign: non_empty(self.identification.callsign),
			number: FlightNumber {
				default: non_empty(self.identification.number.default),
				alternative: non_empty(self.identification.number.alternative),
			},
		};

		FlightDetail {
			identification,
			status: FlightStatus {
				live: self.status.live,
				text: non_empty(self.status.text),
			},
			aircraft: AircraftInfo {
				model_code: non_empty(self.aircraft.model.code),
				model_text: non_empty(self.aircraft.model.text),
				registration: non_empty(self.aircraft.registration),
			},
			airline: AirlineInfo {
				name: non_empty(self.airline.name),
				iata: non_empty(self.airline.code.iata),
				icao: non_empty(self.airline.code.icao),
			},
			origin: self.airport.origin.map(AirportInfo::from),
			destination: self.airport.destination.map(AirportInfo::from),
			times: FlightTimes {
				scheduled: self.time.scheduled.into(),
				actual: self.time.real.into(),
				estimated: self.time.estimated.into(),
			},
			trail: self
				.trail
				.unwrap_or_default()
				.into_iter()
				.map(TrackPoint::from)
				.collect(),
		}
	}
}

impl From<WireAirport> for AirportInfo {
	fn from(wire: WireAirport) -> Self {
		Self {
			name: non_empty(wire.name),
			iata: non_empty(wire.code.iata),
			icao: non_empty(wire.code.icao),
			latitude: wire.position.latitude,
			longitude: wire.position.longitude,
			city: non_empty(wire.position.region.city),
			country: non_empty(wire.position.country.name),
		}
	}
}

impl From<WireTimePair> for TimePair {
	fn from(wire: WireTimePair) -> Self {
		// upstream uses 0 for "unknown" as well as null
		Self {
			departure: wire.departure.filter(|t| *t > 0),
			arrival: wire.arrival.filter(|t| *t > 0),
		}
	}
}

impl From<WireTrackPoint> for TrackPoint {
	fn from(wire: WireTrackPoint) -> Self {
		Self {
			latitude: wire.lat,
			longitude: wire.lng,
			altitude: wire.alt.round() as i32,
			speed: unsigned(wire.spd),
			heading: unsigned(wire.hd),
			timestamp: wire.ts,
		}
	}
}

fn non_empty(value: Option<String>) -> Option<String> {
	value.filter(|v| !v.trim().is_empty())
}

fn unsigned(value: f64) -> u32 {
	// `as` saturates and maps NaN to 0
	value.round().max(0.0) as u32
}
