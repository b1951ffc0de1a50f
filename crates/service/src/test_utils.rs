//! In-memory provider used by the unit tests

use std::sync::Mutex;

use async_trait::async_trait;
use fr24_types::{
	AircraftRecord, AirlineRecord, AirportRecord, AirportSearchFilters, ClientError,
	ClientResult, FlightDataProvider, FlightDetail, FlightIdentification, FlightSearchFilters,
	FlightStatus, FlightSummary, FlightTimes, GeoBounds, Position, Velocity,
};

/// Provider that answers every lookup with a fixed record, or with one fixed failure
#[derive(Debug, Default)]
pub struct MockProvider {
	calls: Mutex<Vec<String>>,
	failure: Option<ClientError>,
}

impl MockProvider {
	pub fn failing(error: ClientError) -> Self {
		Self {
			calls: Mutex::new(Vec::new()),
			failure: Some(error),
		}
	}

	/// Operations invoked so far, as `operation:argument`
	pub fn calls(&self) -> Vec<String> {
		self.calls.lock().unwrap().clone()
	}

	fn record<T>(&self, call: String, value: impl FnOnce() -> T) -> ClientResult<T> {
		self.calls.lock().unwrap().push(call);
		match &self.failure {
			Some(error) => Err(replay(error)),
			None => Ok(value()),
		}
	}
}

fn replay(error: &ClientError) -> ClientError {
	match error {
		ClientError::Configuration { reason } => ClientError::Configuration {
			reason: reason.clone(),
		},
		ClientError::Authentication => ClientError::Authentication,
		ClientError::RateLimitExceeded { attempts } => ClientError::RateLimitExceeded {
			attempts: *attempts,
		},
		ClientError::Upstream { status_code, body } => ClientError::Upstream {
			status_code: *status_code,
			body: body.clone(),
		},
		ClientError::Network(message) => ClientError::Network(message.clone()),
		ClientError::NotFound { resource } => ClientError::not_found(resource.clone()),
		ClientError::InvalidResponse { reason } => ClientError::InvalidResponse {
			reason: reason.clone(),
		},
		ClientError::Cancelled => ClientError::Cancelled,
	}
}

pub fn sample_flight() -> FlightSummary {
	FlightSummary {
		id: "2f8a1c3d".to_string(),
		callsign: Some("BAW123".to_string()),
		airline_code: Some("BA".to_string()),
		position: Position {
			latitude: 51.47,
			longitude: -0.45,
			altitude: 3500,
		},
		velocity: Velocity {
			speed: 220,
			heading: 270,
		},
		aircraft_type: Some("A320".to_string()),
		registration: Some("G-EUUA".to_string()),
		origin: Some("LHR".to_string()),
		destination: Some("EDI".to_string()),
		status: Some("airborne".to_string()),
		timestamp: 1_700_000_000,
	}
}

#[async_trait]
impl FlightDataProvider for MockProvider {
	async fn get_flight_detail(&self, flight_id: &str) -> ClientResult<FlightDetail> {
		self.record(format!("get_flight_detail:{}", flight_id), || FlightDetail {
			identification: FlightIdentification {
				id: flight_id.to_string(),
				callsign: Some("BAW123".to_string()),
				..Default::default()
			},
			status: FlightStatus {
				live: true,
				text: Some("Landed 14:05".to_string()),
			},
			aircraft: Default::default(),
			airline: Default::default(),
			origin: None,
			destination: None,
			times: FlightTimes::default(),
			trail: Vec::new(),
		})
	}

	async fn search_flights(
		&self,
		filters: &FlightSearchFilters,
	) -> ClientResult<Vec<FlightSummary>> {
		let query = filters
			.to_query()
			.into_iter()
			.map(|(k, v)| format!("{}={}", k, v))
			.collect::<Vec<_>>()
			.join("&");
		self.record(format!("search_flights:{}", query), || vec![sample_flight()])
	}

	async fn get_airport(&self, code: &str) -> ClientResult<AirportRecord> {
		self.record(format!("get_airport:{}", code), || AirportRecord {
			name: "London Heathrow Airport".to_string(),
			iata: Some("LHR".to_string()),
			icao: Some("EGLL".to_string()),
			latitude: Some(51.4706),
			longitude: Some(-0.461941),
			altitude: Some(83),
			country: Some("United Kingdom".to_string()),
		})
	}

	async fn search_airports(
		&self,
		filters: &AirportSearchFilters,
	) -> ClientResult<Vec<AirportRecord>> {
		self.record(
			format!("search_airports:{}", filters.query.clone().unwrap_or_default()),
			Vec::new,
		)
	}

	async fn get_airline(&self, code: &str) -> ClientResult<AirlineRecord> {
		self.record(format!("get_airline:{}", code), || AirlineRecord {
			name: "British Airways".to_string(),
			iata: Some("BA".to_string()),
			icao: Some("BAW".to_string()),
			country: Some("United Kingdom".to_string()),
		})
	}

	async fn get_aircraft(&self, registration: &str) -> ClientResult<AircraftRecord> {
		self.record(format!("get_aircraft:{}", registration), || AircraftRecord {
			registration: registration.to_string(),
			type_code: Some("A320".to_string()),
			..Default::default()
		})
	}

	async fn get_flights_in_zone(&self, bounds: &GeoBounds) -> ClientResult<Vec<FlightSummary>> {
		self.record(
			format!("get_flights_in_zone:{}", bounds.to_query_value()),
			|| vec![sample_flight()],
		)
	}
}
