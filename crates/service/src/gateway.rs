//! Gateway service
//!
//! Executes validated tool and resource requests against a [`FlightDataProvider`]
//! and formats the results for presentation.

use std::sync::Arc;

use fr24_types::FlightDataProvider;
use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::ServiceError;
use crate::presentation;
use crate::resources::ResourceUri;
use crate::tools::ToolRequest;

#[derive(Debug, Clone)]
pub struct FlightGateway {
	provider: Arc<dyn FlightDataProvider>,
}

impl FlightGateway {
	pub fn new(provider: Arc<dyn FlightDataProvider>) -> Self {
		Self { provider }
	}

	/// Validate `arguments` for tool `name` and run it
	pub async fn call_tool(&self, name: &str, arguments: &Value) -> Result<Value, ServiceError> {
		let request = ToolRequest::parse(name, arguments).inspect_err(|e| {
			debug!("Rejected call to tool {}: {}", name, e);
		})?;
		self.execute(request).await
	}

	/// Resolve a resource URI to its presentation JSON
	pub async fn read_resource(&self, uri: &str) -> Result<Value, ServiceError> {
		let resource: ResourceUri = uri.parse()?;
		debug!("Reading resource {}", resource);
		self.execute(resource.into_request()).await
	}

	pub async fn execute(&self, request: ToolRequest) -> Result<Value, ServiceError> {
		let tool = request.tool();
		let provider = &self.provider;

		let result = match request {
			ToolRequest::FlightInfo { flight_id } => provider
				.get_flight_detail(&flight_id)
				.await
				.map(|detail| presentation::flight_detail(&detail)),
			ToolRequest::SearchFlights(filters) => provider
				.search_flights(&filters)
				.await
				.map(|flights| presentation::flight_search(&flights)),
			ToolRequest::AirportInfo { code } => provider
				.get_airport(&code)
				.await
				.map(|record| presentation::airport(&record)),
			ToolRequest::SearchAirports(filters) => provider
				.search_airports(&filters)
				.await
				.map(|airports| presentation::airport_search(&airports)),
			ToolRequest::AirlineInfo { code } => provider
				.get_airline(&code)
				.await
				.map(|record| presentation::airline(&record)),
			ToolRequest::AircraftInfo { registration } => provider
				.get_aircraft(&registration)
				.await
				.map(|record| presentation::aircraft(&record)),
			ToolRequest::FlightsInZone(bounds) => provider
				.get_flights_in_zone(&bounds)
				.await
				.map(|flights| presentation::zone_flights(&bounds, &flights)),
		};

		result.map_err(|e| {
			if e.is_caller_error() {
				debug!("{} found nothing: {}", tool, e);
			} else {
				warn!("{} failed: {}", tool, e);
			}
			ServiceError::from(e)
		})
	}
}
