//! Flight search filters

use serde::{Deserialize, Serialize};

/// Filters accepted by the flight search endpoint
///
/// Every set field becomes a query parameter of the same name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightSearchFilters {
	pub flight_iata: Option<String>,
	pub flight_icao: Option<String>,
	pub airline_iata: Option<String>,
	pub airline_icao: Option<String>,
	pub airport_iata: Option<String>,
	pub airport_icao: Option<String>,
	pub registration: Option<String>,
	pub aircraft_type: Option<String>,
	pub limit: Option<u32>,
}

impl FlightSearchFilters {
	/// True when no filter other than `limit` is set
	pub fn is_empty(&self) -> bool {
		self.named_filters().iter().all(|(_, value)| value.is_none())
	}

	pub fn to_query(&self) -> Vec<(String, String)> {
		let mut query: Vec<(String, String)> = self
			.named_filters()
			.into_iter()
			.filter_map(|(name, value)| value.map(|v| (name.to_string(), v.to_string())))
			.collect();

		if let Some(limit) = self.limit {
			query.push(("limit".to_string(), limit.to_string()));
		}

		query
	}

	fn named_filters(&self) -> [(&'static str, Option<&str>); 8] {
		[
			("flight_iata", self.flight_iata.as_deref()),
			("flight_icao", self.flight_icao.as_deref()),
			("airline_iata", self.airline_iata.as_deref()),
			("airline_icao", self.airline_icao.as_deref()),
			("airport_iata", self.airport_iata.as_deref()),
			("airport_icao", self.airport_icao.as_deref()),
			("registration", self.registration.as_deref()),
			("aircraft_type", self.aircraft_type.as_deref()),
		]
	}
}
