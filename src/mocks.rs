//! Mock providers for demos and testing
//!
//! In-memory [`FlightDataProvider`] implementations that let the gateway run and be
//! tested without an upstream credential.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use fr24_types::{
	AircraftRecord, AirlineRecord, AirportRecord, AirportSearchFilters, ClientError,
	ClientResult, FlightDataProvider, FlightDetail, FlightIdentification, FlightNumber,
	FlightSearchFilters, FlightStatus, FlightSummary, FlightTimes, GeoBounds, Position, TimePair,
	Velocity,
};

/// Provider serving a small fixed data set
///
/// Flights match a search when any set filter equals the corresponding field. Zone
/// queries return the flights whose position lies inside the bounds.
#[derive(Debug, Clone)]
pub struct MockDemoProvider {
	pub flights: Vec<FlightSummary>,
	pub airports: Vec<AirportRecord>,
	pub airlines: Vec<AirlineRecord>,
	pub aircraft: Vec<AircraftRecord>,
}

impl MockDemoProvider {
	pub fn new() -> Self {
		Self {
			flights: vec![
				mock_flight("2f8a1c3d", "BAW123", "BA", "G-EUUA", "LHR", "EDI", 51.6, -0.9),
				mock_flight("2f8a2e11", "EZY45", "U2", "G-EZWA", "LGW", "AMS", 51.9, 1.2),
				mock_flight("2f8a3b02", "DLH4", "LH", "D-AIMA", "FRA", "JFK", 52.4, -20.5),
			],
			airports: vec![mock_airport(), mock_airport_edinburgh()],
			airlines: vec![mock_airline()],
			aircraft: vec![mock_aircraft()],
		}
	}
}

impl Default for MockDemoProvider {
	fn default() -> Self {
		Self::new()
	}
}

fn matches_code(code: &str, iata: &Option<String>, icao: &Option<String>) -> bool {
	iata.as_deref() == Some(code) || icao.as_deref() == Some(code)
}

fn flight_matches(flight: &FlightSummary, filters: &FlightSearchFilters) -> bool {
	let callsign = flight.callsign.as_deref();
	let airline = flight.airline_code.as_deref();
	let airports = [flight.origin.as_deref(), flight.destination.as_deref()];

	let checks = [
		filters.flight_icao.as_deref().map(|v| callsign == Some(v)),
		filters
			.flight_iata
			.as_deref()
			.map(|v| flight_number_matches(v, airline, callsign)),
		filters.airline_iata.as_deref().map(|v| airline == Some(v)),
		filters
			.airline_icao
			.as_deref()
			.map(|v| callsign.is_some_and(|c| c.starts_with(v))),
		filters.airport_iata.as_deref().map(|v| airports.contains(&Some(v))),
		filters.airport_icao.as_deref().map(|v| airports.contains(&Some(v))),
		filters
			.registration
			.as_deref()
			.map(|v| flight.registration.as_deref() == Some(v)),
		filters
			.aircraft_type
			.as_deref()
			.map(|v| flight.aircraft_type.as_deref() == Some(v)),
	];

	checks.iter().flatten().any(|matched| *matched)
}

/// `BA123` matches airline `BA` flying callsign `BAW123`
fn flight_number_matches(flight_iata: &str, airline: Option<&str>, callsign: Option<&str>) -> bool {
	match (airline, callsign) {
		(Some(airline), Some(callsign)) => flight_iata
			.strip_prefix(airline)
			.is_some_and(|number| !number.is_empty() && callsign.ends_with(number)),
		_ => false,
	}
}

fn in_bounds(flight: &FlightSummary, bounds: &GeoBounds) -> bool {
	let Position {
		latitude,
		longitude,
		..
	} = flight.position;
	(bounds.south..=bounds.north).contains(&latitude)
		&& (bounds.west..=bounds.east).contains(&longitude)
}

fn limited<T>(items: impl Iterator<Item = T>, limit: Option<u32>) -> Vec<T> {
	items.take(limit.map_or(usize::MAX, |l| l as usize)).collect()
}

#[async_trait]
impl FlightDataProvider for MockDemoProvider {
	async fn get_flight_detail(&self, flight_id: &str) -> ClientResult<FlightDetail> {
		let flight = self
			.flights
			.iter()
			.find(|f| f.id == flight_id)
			.ok_or_else(|| ClientError::not_found(format!("flight {}", flight_id)))?;

		Ok(FlightDetail {
			identification: FlightIdentification {
				id: flight.id.clone(),
				callsign: flight.callsign.clone(),
				number: FlightNumber::default(),
			},
			status: FlightStatus {
				live: true,
				text: flight.status.clone(),
			},
			aircraft: fr24_types::AircraftInfo {
				model_code: flight.aircraft_type.clone(),
				model_text: None,
				registration: flight.registration.clone(),
			},
			airline: fr24_types::AirlineInfo {
				name: None,
				iata: flight.airline_code.clone(),
				icao: None,
			},
			origin: None,
			destination: None,
			times: FlightTimes {
				scheduled: TimePair {
					departure: Some(flight.timestamp - 3_600),
					arrival: Some(flight.timestamp + 1_800),
				},
				..Default::default()
			},
			trail: Vec::new(),
		})
	}

	async fn search_flights(
		&self,
		filters: &FlightSearchFilters,
	) -> ClientResult<Vec<FlightSummary>> {
		Ok(limited(
			self.flights
				.iter()
				.filter(|f| flight_matches(f, filters))
				.cloned(),
			filters.limit,
		))
	}

	async fn get_airport(&self, code: &str) -> ClientResult<AirportRecord> {
		self.airports
			.iter()
			.find(|a| matches_code(code, &a.iata, &a.icao))
			.cloned()
			.ok_or_else(|| ClientError::not_found(format!("airport {}", code)))
	}

	async fn search_airports(
		&self,
		filters: &AirportSearchFilters,
	) -> ClientResult<Vec<AirportRecord>> {
		let query = filters.query.as_deref().map(str::to_lowercase);
		let matching = self.airports.iter().filter(|airport| {
			let query_ok = query
				.as_deref()
				.map_or(true, |q| airport.name.to_lowercase().contains(q));
			let country_ok = filters
				.country
				.as_deref()
				.map_or(true, |c| airport.country.as_deref() == Some(c));
			query_ok && country_ok
		});

		Ok(limited(matching.cloned(), filters.limit))
	}

	async fn get_airline(&self, code: &str) -> ClientResult<AirlineRecord> {
		self.airlines
			.iter()
			.find(|a| matches_code(code, &a.iata, &a.icao))
			.cloned()
			.ok_or_else(|| ClientError::not_found(format!("airline {}", code)))
	}

	async fn get_aircraft(&self, registration: &str) -> ClientResult<AircraftRecord> {
		self.aircraft
			.iter()
			.find(|a| a.registration == registration)
			.cloned()
			.ok_or_else(|| ClientError::not_found(format!("aircraft {}", registration)))
	}

	async fn get_flights_in_zone(&self, bounds: &GeoBounds) -> ClientResult<Vec<FlightSummary>> {
		Ok(self
			.flights
			.iter()
			.filter(|f| in_bounds(f, bounds))
			.cloned()
			.collect())
	}
}

/// Provider that fails every call with the error built by `make_error`
#[derive(Debug)]
pub struct MockFailingProvider {
	make_error: fn() -> ClientError,
	calls: AtomicUsize,
}

impl MockFailingProvider {
	pub fn new(make_error: fn() -> ClientError) -> Self {
		Self {
			make_error,
			calls: AtomicUsize::new(0),
		}
	}

	pub fn call_count(&self) -> usize {
		self.calls.load(Ordering::Relaxed)
	}

	fn fail<T>(&self) -> ClientResult<T> {
		self.calls.fetch_add(1, Ordering::Relaxed);
		Err((self.make_error)())
	}
}

#[async_trait]
impl FlightDataProvider for MockFailingProvider {
	async fn get_flight_detail(&self, _flight_id: &str) -> ClientResult<FlightDetail> {
		self.fail()
	}

	async fn search_flights(&self, _: &FlightSearchFilters) -> ClientResult<Vec<FlightSummary>> {
		self.fail()
	}

	async fn get_airport(&self, _code: &str) -> ClientResult<AirportRecord> {
		self.fail()
	}

	async fn search_airports(&self, _: &AirportSearchFilters) -> ClientResult<Vec<AirportRecord>> {
		self.fail()
	}

	async fn get_airline(&self, _code: &str) -> ClientResult<AirlineRecord> {
		self.fail()
	}

	async fn get_aircraft(&self, _registration: &str) -> ClientResult<AircraftRecord> {
		self.fail()
	}

	async fn get_flights_in_zone(&self, _: &GeoBounds) -> ClientResult<Vec<FlightSummary>> {
		self.fail()
	}
}

#[allow(clippy::too_many_arguments)]
pub fn mock_flight(
	id: &str,
	callsign: &str,
	airline: &str,
	registration: &str,
	origin: &str,
	destination: &str,
	latitude: f64,
	longitude: f64,
) -> FlightSummary {
	FlightSummary {
		id: id.to_string(),
		callsign: Some(callsign.to_string()),
		airline_code: Some(airline.to_string()),
		position: Position {
			latitude,
			longitude,
			altitude: 34_000,
		},
		velocity: Velocity {
			speed: 450,
			heading: 310,
		},
		aircraft_type: Some("A320".to_string()),
		registration: Some(registration.to_string()),
		origin: Some(origin.to_string()),
		destination: Some(destination.to_string()),
		status: Some("airborne".to_string()),
		timestamp: 1_700_000_000,
	}
}

pub fn mock_airport() -> AirportRecord {
	AirportRecord {
		name: "London Heathrow Airport".to_string(),
		iata: Some("LHR".to_string()),
		icao: Some("EGLL".to_string()),
		latitude: Some(51.4706),
		longitude: Some(-0.461941),
		altitude: Some(83),
		country: Some("United Kingdom".to_string()),
	}
}

fn mock_airport_edinburgh() -> AirportRecord {
	AirportRecord {
		name: "Edinburgh Airport".to_string(),
		iata: Some("EDI".to_string()),
		icao: Some("EGPH".to_string()),
		latitude: Some(55.95),
		longitude: Some(-3.3725),
		altitude: Some(135),
		country: Some("United Kingdom".to_string()),
	}
}

pub fn mock_airline() -> AirlineRecord {
	AirlineRecord {
		name: "British Airways".to_string(),
		iata: Some("BA".to_string()),
		icao: Some("BAW".to_string()),
		country: Some("United Kingdom".to_string()),
	}
}

pub fn mock_aircraft() -> AircraftRecord {
	AircraftRecord {
		registration: "G-EUUA".to_string(),
		type_code: Some("A320".to_string()),
		manufacturer: Some("Airbus".to_string()),
		model: Some("A320-232".to_string()),
		owner: Some("British Airways".to_string()),
		operator: Some("British Airways".to_string()),
		age: Some(22.4),
		msn: Some("1661".to_string()),
	}
}
