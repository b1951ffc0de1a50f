//! Provider trait consumed by tool and resource handlers

use async_trait::async_trait;
use std::fmt::Debug;

use super::ClientResult;
use crate::{
	AircraftRecord, AirlineRecord, AirportRecord, AirportSearchFilters, FlightDetail,
	FlightSearchFilters, FlightSummary, GeoBounds,
};

/// Read-only access to flight-tracking data
///
/// Single-entity lookups fail with `ClientError::NotFound` when upstream has no such
/// entity; multi-entity queries return an empty vector instead.
#[async_trait]
pub trait FlightDataProvider: Send + Sync + Debug {
	/// Full detail for one flight, including its trail
	async fn get_flight_detail(&self, flight_id: &str) -> ClientResult<FlightDetail>;

	async fn search_flights(&self, filters: &FlightSearchFilters)
		-> ClientResult<Vec<FlightSummary>>;

	/// Look up an airport by IATA (3 characters) or ICAO (any other length) code
	async fn get_airport(&self, code: &str) -> ClientResult<AirportRecord>;

	async fn search_airports(
		&self,
		filters: &AirportSearchFilters,
	) -> ClientResult<Vec<AirportRecord>>;

	/// Look up an airline by IATA (2 characters) or ICAO (any other length) code
	async fn get_airline(&self, code: &str) -> ClientResult<AirlineRecord>;

	async fn get_aircraft(&self, registration: &str) -> ClientResult<AircraftRecord>;

	/// All flights currently inside `bounds`; bounds are forwarded unvalidated
	async fn get_flights_in_zone(&self, bounds: &GeoBounds) -> ClientResult<Vec<FlightSummary>>;
}
