//! Domain mapping layer
//!
//! [`FlightDataClient`] turns each provider operation into one request against a
//! fixed endpoint and unwraps that endpoint's envelope. Detail lookups fail with
//! `NotFound` on an absent payload; list queries return an empty vector.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use url::Url;

use crate::envelope::{self, list_or_empty, require};
use crate::retry::RetryingTransport;
use crate::timer::{BackoffTimer, TokioTimer};
use crate::transport::{HttpTransport, ReqwestTransport};
use crate::wire::{WireFlight, WireFlightDetail};
use fr24_types::{
	AircraftRecord, AirlineRecord, AirportRecord, AirportSearchFilters, ClientConfig,
	ClientError, ClientResult, FlightDataProvider, FlightDetail, FlightSearchFilters,
	FlightSummary, GeoBounds,
};

/// Query parameter used for an airport code: 3 characters is IATA, anything else ICAO
pub fn airport_code_param(code: &str) -> &'static str {
	if code.chars().count() == 3 {
		"iata"
	} else {
		"icao"
	}
}

/// Query parameter used for an airline code: 2 characters is IATA, anything else ICAO
pub fn airline_code_param(code: &str) -> &'static str {
	if code.chars().count() == 2 {
		"iata"
	} else {
		"icao"
	}
}

/// Flightradar24 API client
///
/// Construct once at startup and share behind an `Arc`; it holds only immutable
/// configuration and a pooled connection.
#[derive(Debug, Clone)]
pub struct FlightDataClient {
	base_url: Url,
	requester: RetryingTransport,
}

impl FlightDataClient {
	/// Create a client with the reqwest transport and tokio backoff timer
	pub fn new(config: ClientConfig) -> ClientResult<Self> {
		let transport = Arc::new(ReqwestTransport::new(&config)?);
		Self::with_transport(config, transport, Arc::new(TokioTimer))
	}

	/// Create a client over a custom transport and timer
	pub fn with_transport(
		config: ClientConfig,
		transport: Arc<dyn HttpTransport>,
		timer: Arc<dyn BackoffTimer>,
	) -> ClientResult<Self> {
		let base_url = parse_base_url(config.base_url())?;
		let requester = RetryingTransport::new(transport, timer, config.retry().clone());

		Ok(Self {
			base_url,
			requester,
		})
	}

	/// Abort pending requests and backoff sleeps once `token` is cancelled
	pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
		self.requester = self.requester.with_cancellation(token);
		self
	}

	pub fn base_url(&self) -> &str {
		self.base_url.as_str()
	}

	/// Issue a GET against `segments` under the base address
	pub async fn request(&self, segments: &[&str], query: &[(String, String)]) -> ClientResult<Value> {
		let url = self.endpoint_url(segments);
		self.requester.request(&url, query).await
	}

	/// Base address joined with `segments`, each percent-encoded as one path segment
	fn endpoint_url(&self, segments: &[&str]) -> String {
		let mut url = self.base_url.clone();
		// cannot-be-a-base URLs were rejected at construction
		if let Ok(mut path) = url.path_segments_mut() {
			path.pop_if_empty().extend(segments);
		}
		url.to_string()
	}
}

fn parse_base_url(base_url: &str) -> ClientResult<Url> {
	let url = Url::parse(base_url).map_err(|e| ClientError::Configuration {
		reason: format!("Invalid base URL '{}': {}", base_url, e),
	})?;

	if url.cannot_be_a_base() {
		return Err(ClientError::Configuration {
			reason: format!("Base URL '{}' cannot carry a path", base_url),
		});
	}

	Ok(url)
}

fn code_query(param: &str, code: &str) -> Vec<(String, String)> {
	vec![(param.to_string(), code.to_string())]
}

#[async_trait]
impl FlightDataProvider for FlightDataClient {
	async fn get_flight_detail(&self, flight_id: &str) -> ClientResult<FlightDetail> {
		debug!("Fetching flight detail for {}", flight_id);

		let body = self.request(&["flight", "info", flight_id], &[]).await?;
		let wire: WireFlightDetail = require(&body, envelope::FLIGHT_DETAIL, || {
			format!("flight {}", flight_id)
		})?;

		Ok(wire.into_detail(flight_id))
	}

	async fn search_flights(
		&self,
		filters: &FlightSearchFilters,
	) -> ClientResult<Vec<FlightSummary>> {
		let body = self.request(&["flights"], &filters.to_query()).await?;
		let flights: Vec<WireFlight> = list_or_empty(&body, envelope::FLIGHTS)?;

		debug!("Flight search matched {} flight(s)", flights.len());
		Ok(flights.into_iter().map(FlightSummary::from).collect())
	}

	async fn get_airport(&self, code: &str) -> ClientResult<AirportRecord> {
		let param = airport_code_param(code);
		debug!("Fetching airport {} by {}", code, param);

		let body = self.request(&["airports"], &code_query(param, code)).await?;
		require(&body, envelope::AIRPORT, || format!("airport {}", code))
	}

	async fn search_airports(
		&self,
		filters: &AirportSearchFilters,
	) -> ClientResult<Vec<AirportRecord>> {
		let body = self.request(&["airports"], &filters.to_query()).await?;
		let airports: Vec<AirportRecord> = list_or_empty(&body, envelope::AIRPORTS)?;

		debug!("Airport search matched {} airport(s)", airports.len());
		Ok(airports)
	}

	async fn get_airline(&self, code: &str) -> ClientResult<AirlineRecord> {
		let param = airline_code_param(code);
		debug!("Fetching airline {} by {}", code, param);

		let body = self.request(&["airlines"], &code_query(param, code)).await?;
		require(&body, envelope::AIRLINE, || format!("airline {}", code))
	}

	async fn get_aircraft(&self, registration: &str) -> ClientResult<AircraftRecord> {
		debug!("Fetching aircraft {}", registration);

		let body = self.request(&["aircraft", registration], &[]).await?;
		require(&body, envelope::AIRCRAFT, || {
			format!("aircraft {}", registration)
		})
	}

	async fn get_flights_in_zone(&self, bounds: &GeoBounds) -> ClientResult<Vec<FlightSummary>> {
		let query = vec![("bounds".to_string(), bounds.to_query_value())];
		let body = self.request(&["zones"], &query).await?;
		let flights: Vec<WireFlight> = list_or_empty(&body, envelope::FLIGHTS)?;

		debug!("Zone {} contains {} flight(s)", bounds, flights.len());
		Ok(flights.into_iter().map(FlightSummary::from).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::test_utils::{RecordingTimer, ScriptedTransport};
	use crate::transport::RawResponse;
	use serde_json::json;

	const BASE: &str = "https://api.flightradar24.com/v1";

	fn client_over(transport: &Arc<ScriptedTransport>) -> FlightDataClient {
		let config = ClientConfig::new("token-abc").unwrap();
		FlightDataClient::with_transport(
			config,
			transport.clone(),
			Arc::new(RecordingTimer::default()),
		)
		.unwrap()
	}

	fn query(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
		pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect()
	}

	#[test]
	fn test_airport_code_param_by_length() {
		assert_eq!(airport_code_param("LHR"), "iata");
		assert_eq!(airport_code_param("EGLL"), "icao");
		assert_eq!(airport_code_param("L1"), "icao");
		assert_eq!(airport_code_param(""), "icao");
		// length, not charset
		assert_eq!(airport_code_param("1?x"), "iata");
	}

	#[test]
	fn test_airline_code_param_by_length() {
		assert_eq!(airline_code_param("BA"), "iata");
		assert_eq!(airline_code_param("BAW"), "icao");
		assert_eq!(airline_code_param("B"), "icao");
		assert_eq!(airline_code_param("9W"), "iata");
	}

	#[test]
	fn test_endpoint_url_encodes_segments() {
		let transport = Arc::new(ScriptedTransport::default());
		let client = client_over(&transport);

		assert_eq!(
			client.endpoint_url(&["flight", "info", "2f8a1c3d"]),
			"https://api.flightradar24.com/v1/flight/info/2f8a1c3d"
		);
		assert_eq!(
			client.endpoint_url(&["aircraft", "N12/3 4"]),
			"https://api.flightradar24.com/v1/aircraft/N12%2F3%204"
		);
	}

	#[test]
	fn test_base_url_with_trailing_slash() {
		let config = ClientConfig::new("token")
			.unwrap()
			.with_base_url("http://127.0.0.1:8080/api/v1/");
		let client = FlightDataClient::with_transport(
			config,
			Arc::new(ScriptedTransport::default()),
			Arc::new(RecordingTimer::default()),
		)
		.unwrap();

		assert_eq!(
			client.endpoint_url(&["zones"]),
			"http://127.0.0.1:8080/api/v1/zones"
		);
	}

	#[test]
	fn test_invalid_base_url_rejected() {
		for base in ["not a url", "mailto:ops@example.com"] {
			let config = ClientConfig::new("token").unwrap().with_base_url(base);
			let result = FlightDataClient::with_transport(
				config,
				Arc::new(ScriptedTransport::default()),
				Arc::new(RecordingTimer::default()),
			);
			assert!(matches!(result, Err(ClientError::Configuration { .. })));
		}
	}

	#[tokio::test]
	async fn test_get_airport_by_iata_returns_nested_object() {
		let transport = Arc::new(ScriptedTransport::ok_json(json!({
			"result": { "response": { "airport": {
				"name": "London Heathrow Airport",
				"iata": "LHR",
				"icao": "EGLL",
				"latitude": 51.4706,
				"longitude": -0.461941,
				"altitude": 83,
				"country": "United Kingdom"
			}}}
		})));
		let client = client_over(&transport);

		let airport = client.get_airport("LHR").await.unwrap();

		assert_eq!(airport.name, "London Heathrow Airport");
		assert_eq!(airport.icao.as_deref(), Some("EGLL"));
		assert_eq!(
			transport.last_request(),
			(format!("{}/airports", BASE), query(&[("iata", "LHR")]))
		);
	}

	#[tokio::test]
	async fn test_get_airport_by_icao() {
		let transport = Arc::new(ScriptedTransport::ok_json(json!({
			"result": { "response": { "airport": { "name": "Heathrow", "icao": "EGLL" } } }
		})));
		let client = client_over(&transport);

		client.get_airport("EGLL").await.unwrap();
		assert_eq!(transport.last_request().1, query(&[("icao", "EGLL")]));
	}

	#[tokio::test]
	async fn test_detail_lookups_fail_on_missing_payload() {
		let empty = json!({ "result": { "response": {} } });

		let transport = Arc::new(ScriptedTransport::ok_json(empty.clone()));
		let err = client_over(&transport).get_airport("XXX").await.unwrap_err();
		assert!(matches!(err, ClientError::NotFound { resource } if resource == "airport XXX"));

		let transport = Arc::new(ScriptedTransport::ok_json(empty.clone()));
		let err = client_over(&transport).get_airline("ZZ").await.unwrap_err();
		assert!(matches!(err, ClientError::NotFound { .. }));
		assert_eq!(transport.last_request().1, query(&[("iata", "ZZ")]));

		let transport = Arc::new(ScriptedTransport::ok_json(empty.clone()));
		let err = client_over(&transport).get_aircraft("G-XXXX").await.unwrap_err();
		assert!(matches!(err, ClientError::NotFound { .. }));

		let transport = Arc::new(ScriptedTransport::ok_json(json!({})));
		let err = client_over(&transport).get_flight_detail("dead").await.unwrap_err();
		assert!(matches!(err, ClientError::NotFound { resource } if resource == "flight dead"));
	}

	#[tokio::test]
	async fn test_search_operations_return_empty_on_missing_payload() {
		let transport = Arc::new(ScriptedTransport::ok_json(json!({ "result": {} })));
		let filters = FlightSearchFilters {
			flight_iata: Some("BA123".to_string()),
			limit: Some(10),
			..Default::default()
		};
		let flights = client_over(&transport).search_flights(&filters).await.unwrap();
		assert!(flights.is_empty());
		assert_eq!(
			transport.last_request(),
			(
				format!("{}/flights", BASE),
				query(&[("flight_iata", "BA123"), ("limit", "10")])
			)
		);

		let transport = Arc::new(ScriptedTransport::ok_json(json!({ "result": { "response": {} } })));
		let filters = AirportSearchFilters {
			query: Some("nowhere".to_string()),
			..Default::default()
		};
		assert!(client_over(&transport)
			.search_airports(&filters)
			.await
			.unwrap()
			.is_empty());

		let transport = Arc::new(ScriptedTransport::ok_json(json!({ "result": { "response": { "flights": null } } })));
		let bounds = GeoBounds::new(52.0, 50.0, -1.0, 1.0).unwrap();
		assert!(client_over(&transport)
			.get_flights_in_zone(&bounds)
			.await
			.unwrap()
			.is_empty());
	}

	#[tokio::test]
	async fn test_zone_query_forwards_literal_bounds() {
		let transport = Arc::new(ScriptedTransport::ok_json(json!({
			"result": { "response": { "flights": [
				{ "id": "a1", "callsign": "EZY12", "lat": 51.0, "lng": 0.1, "alt": 12000, "speed": 310, "heading": 90, "timestamp": 1700000000 },
				{ "id": "b2", "lat": 51.2, "lng": 0.3, "timestamp": 1700000005 }
			]}}
		})));
		// the client performs no bounds validation
		let inverted = GeoBounds {
			north: 10.0,
			south: 20.0,
			west: 0.0,
			east: 5.5,
		};

		let flights = client_over(&transport)
			.get_flights_in_zone(&inverted)
			.await
			.unwrap();

		assert_eq!(flights.len(), 2);
		assert_eq!(flights[0].callsign.as_deref(), Some("EZY12"));
		assert_eq!(flights[0].velocity.speed, 310);
		assert_eq!(
			transport.last_request(),
			(format!("{}/zones", BASE), query(&[("bounds", "10,20,0,5.5")]))
		);
	}

	#[tokio::test]
	async fn test_flight_detail_mapping() {
		let transport = Arc::new(ScriptedTransport::ok_json(json!({
			"result": {
				"identification": {
					"id": "2f8a1c3d",
					"callsign": "BAW123",
					"number": { "default": "BA123", "alternative": null }
				},
				"status": { "live": true, "text": "Estimated 14:05" },
				"aircraft": {
					"model": { "code": "A320", "text": "Airbus A320-232" },
					"registration": "G-EUUA"
				},
				"airline": { "name": "British Airways", "code": { "iata": "BA", "icao": "BAW" } },
				"airport": {
					"origin": {
						"name": "London Heathrow Airport",
						"code": { "iata": "LHR", "icao": "EGLL" },
						"position": {
							"latitude": 51.4706,
							"longitude": -0.461941,
							"country": { "name": "United Kingdom" },
							"region": { "city": "London" }
						}
					},
					"destination": null
				},
				"time": {
					"scheduled": { "departure": 1700000000, "arrival": 1700007200 },
					"real": { "departure": 1700000600, "arrival": null },
					"estimated": { "departure": null, "arrival": 1700007500 }
				},
				"trail": [
					{ "lat": 51.47, "lng": -0.45, "alt": 0, "spd": 0, "hd": 270, "ts": 1700000600 },
					{ "lat": 51.48, "lng": -0.50, "alt": 2500, "spd": 180, "hd": 271, "ts": 1700000700 }
				]
			}
		})));

		let detail = client_over(&transport)
			.get_flight_detail("2f8a1c3d")
			.await
			.unwrap();

		assert_eq!(
			transport.last_request().0,
			format!("{}/flight/info/2f8a1c3d", BASE)
		);
		assert!(transport.last_request().1.is_empty());
		assert_eq!(detail.identification.callsign.as_deref(), Some("BAW123"));
		assert_eq!(detail.identification.number.default.as_deref(), Some("BA123"));
		assert!(detail.status.live);
		assert_eq!(detail.aircraft.model_text.as_deref(), Some("Airbus A320-232"));
		assert_eq!(detail.airline.icao.as_deref(), Some("BAW"));

		let origin = detail.origin.unwrap();
		assert_eq!(origin.iata.as_deref(), Some("LHR"));
		assert_eq!(origin.city.as_deref(), Some("London"));
		assert_eq!(origin.country.as_deref(), Some("United Kingdom"));
		assert!(detail.destination.is_none());

		assert_eq!(detail.times.scheduled.arrival, Some(1_700_007_200));
		assert_eq!(detail.times.actual.departure, Some(1_700_000_600));
		assert_eq!(detail.times.actual.arrival, None);
		assert_eq!(detail.times.estimated.arrival, Some(1_700_007_500));

		assert_eq!(detail.trail.len(), 2);
		assert_eq!(detail.trail[1].altitude, 2500);
		assert_eq!(detail.trail[1].timestamp, 1_700_000_700);
	}

	#[tokio::test]
	async fn test_get_aircraft_path() {
		let transport = Arc::new(ScriptedTransport::ok_json(json!({
			"result": { "response": { "aircraft": {
				"registration": "G-EUUA",
				"type": "A320",
				"manufacturer": "Airbus",
				"model": "A320-232",
				"owner": "British Airways",
				"operator": "British Airways",
				"age": 22.4,
				"msn": "1661"
			}}}
		})));

		let aircraft = client_over(&transport).get_aircraft("G-EUUA").await.unwrap();

		assert_eq!(aircraft.type_code.as_deref(), Some("A320"));
		assert_eq!(
			transport.last_request().0,
			format!("{}/aircraft/G-EUUA", BASE)
		);
	}

	#[tokio::test]
	async fn test_null_fields_do_not_fail_decoding() {
		let transport = Arc::new(ScriptedTransport::ok_json(json!({
			"result": { "response": { "flights": [
				{ "id": "a1", "lat": 51.0, "lng": 0.1, "alt": null, "speed": null, "heading": null, "timestamp": 1700000000 }
			]}}
		})));
		let bounds = GeoBounds::new(52.0, 50.0, -1.0, 1.0).unwrap();
		let flights = client_over(&transport).get_flights_in_zone(&bounds).await.unwrap();
		assert_eq!(flights.len(), 1);
		assert_eq!(flights[0].position.altitude, 0);

		let transport = Arc::new(ScriptedTransport::ok_json(json!({
			"result": {
				"identification": { "id": "30a1b2c3" },
				"airline": null,
				"aircraft": null,
				"time": null
			}
		})));
		let detail = client_over(&transport).get_flight_detail("30a1b2c3").await.unwrap();
		assert_eq!(detail.identification.id, "30a1b2c3");
		assert!(detail.airline.name.is_none());
		assert!(detail.times.scheduled.departure.is_none());

		let transport = Arc::new(ScriptedTransport::ok_json(json!({
			"result": { "response": { "airport": { "name": null, "iata": "LHR", "altitude": 83.5 } } }
		})));
		let airport = client_over(&transport).get_airport("LHR").await.unwrap();
		assert_eq!(airport.altitude, Some(84));
	}

	#[tokio::test]
	async fn test_errors_propagate_through_operations() {
		let transport = Arc::new(ScriptedTransport::new(vec![Ok(RawResponse::new(
			401,
			"unauthorized",
		))]));
		let err = client_over(&transport).get_airline("BAW").await.unwrap_err();
		assert!(matches!(err, ClientError::Authentication));
		assert_eq!(transport.call_count(), 1);
	}
}
