//! Presentation formatting
//!
//! Converts domain records into the JSON shapes returned to the agent. Unix
//! timestamps are rendered as RFC 3339 UTC strings.

use chrono::{DateTime, SecondsFormat};
use fr24_types::{
	AircraftRecord, AirlineRecord, AirportInfo, AirportRecord, FlightDetail, FlightSummary,
	GeoBounds, TimePair, TrackPoint,
};
use serde_json::{json, Value};

/// Unix seconds as `2023-11-14T22:13:20.000Z`; `null` when out of range
pub fn iso_timestamp(unix_seconds: i64) -> Value {
	DateTime::from_timestamp(unix_seconds, 0)
		.map(|dt| Value::String(dt.to_rfc3339_opts(SecondsFormat::Millis, true)))
		.unwrap_or(Value::Null)
}

fn optional_timestamp(unix_seconds: Option<i64>) -> Value {
	unix_seconds.map(iso_timestamp).unwrap_or(Value::Null)
}

pub fn flight_summary(flight: &FlightSummary) -> Value {
	json!({
		"id": flight.id,
		"callsign": flight.callsign,
		"airline": flight.airline_code,
		"position": {
			"latitude": flight.position.latitude,
			"longitude": flight.position.longitude,
			"altitude": flight.position.altitude,
		},
		"velocity": {
			"speed": flight.velocity.speed,
			"heading": flight.velocity.heading,
		},
		"aircraft": {
			"type": flight.aircraft_type,
			"registration": flight.registration,
		},
		"route": {
			"origin": flight.origin,
			"destination": flight.destination,
		},
		"status": flight.status,
		"last_updated": iso_timestamp(flight.timestamp),
	})
}

pub fn flight_search(flights: &[FlightSummary]) -> Value {
	json!({
		"count": flights.len(),
		"flights": flights.iter().map(flight_summary).collect::<Vec<_>>(),
	})
}

pub fn zone_flights(bounds: &GeoBounds, flights: &[FlightSummary]) -> Value {
	json!({
		"bounds": {
			"north": bounds.north,
			"south": bounds.south,
			"west": bounds.west,
			"east": bounds.east,
		},
		"count": flights.len(),
		"flights": flights.iter().map(flight_summary).collect::<Vec<_>>(),
	})
}

pub fn flight_detail(detail: &FlightDetail) -> Value {
	json!({
		"id": detail.identification.id,
		"callsign": detail.identification.callsign,
		"flight_number": detail.identification.number.default,
		"alternative_flight_number": detail.identification.number.alternative,
		"status": {
			"live": detail.status.live,
			"text": detail.status.text,
		},
		"aircraft": {
			"model": detail.aircraft.model_text,
			"type": detail.aircraft.model_code,
			"registration": detail.aircraft.registration,
		},
		"airline": {
			"name": detail.airline.name,
			"iata": detail.airline.iata,
			"icao": detail.airline.icao,
		},
		"route": {
			"origin": detail.origin.as_ref().map(route_airport),
			"destination": detail.destination.as_ref().map(route_airport),
		},
		"times": {
			"scheduled": time_pair(&detail.times.scheduled),
			"actual": time_pair(&detail.times.actual),
			"estimated": time_pair(&detail.times.estimated),
		},
		"trail": detail.trail.iter().map(track_point).collect::<Vec<_>>(),
	})
}

fn route_airport(airport: &AirportInfo) -> Value {
	json!({
		"name": airport.name,
		"iata": airport.iata,
		"icao": airport.icao,
		"position": {
			"latitude": airport.latitude,
			"longitude": airport.longitude,
		},
		"city": airport.city,
		"country": airport.country,
	})
}

fn time_pair(pair: &TimePair) -> Value {
	json!({
		"departure": optional_timestamp(pair.departure),
		"arrival": optional_timestamp(pair.arrival),
	})
}

fn track_point(point: &TrackPoint) -> Value {
	json!({
		"latitude": point.latitude,
		"longitude": point.longitude,
		"altitude": point.altitude,
		"speed": point.speed,
		"heading": point.heading,
		"timestamp": iso_timestamp(point.timestamp),
	})
}

pub fn airport(record: &AirportRecord) -> Value {
	json!({
		"name": record.name,
		"iata": record.iata,
		"icao": record.icao,
		"position": {
			"latitude": record.latitude,
			"longitude": record.longitude,
			"altitude": record.altitude,
		},
		"country": record.country,
	})
}

pub fn airport_search(airports: &[AirportRecord]) -> Value {
	json!({
		"count": airports.len(),
		"airports": airports.iter().map(airport).collect::<Vec<_>>(),
	})
}

pub fn airline(record: &AirlineRecord) -> Value {
	json!({
		"name": record.name,
		"iata": record.iata,
		"icao": record.icao,
		"country": record.country,
	})
}

pub fn aircraft(record: &AircraftRecord) -> Value {
	json!({
		"registration": record.registration,
		"type": record.type_code,
		"manufacturer": record.manufacturer,
		"model": record.model,
		"owner": record.owner,
		"operator": record.operator,
		"age_years": record.age,
		"serial_number": record.msn,
	})
}
