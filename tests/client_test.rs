//! FlightDataClient over the real reqwest transport against a mock upstream

mod mocks;

use std::time::Duration;

use fr24_gateway::{
	ClientConfig, ClientError, FlightDataClient, FlightDataProvider, FlightSearchFilters,
	GeoBounds, RetryPolicy,
};
use serde_json::json;

use crate::mocks::upstream::closed_port_url;
use crate::mocks::{MockUpstream, ScriptedReply, TEST_API_KEY};

fn fast_retry(max_attempts: u32) -> RetryPolicy {
	RetryPolicy {
		initial_delay: Duration::from_millis(5),
		multiplier: 2,
		max_attempts,
		max_total_delay: None,
	}
}

fn client_for(base_url: &str) -> FlightDataClient {
	let config = ClientConfig::new(TEST_API_KEY)
		.unwrap()
		.with_base_url(base_url)
		.with_retry_policy(fast_retry(3));
	FlightDataClient::new(config).unwrap()
}

#[tokio::test]
async fn test_get_airport_sends_authenticated_iata_query() {
	let upstream = MockUpstream::spawn_json(json!({
		"result": { "response": { "airport": {
			"name": "London Heathrow Airport",
			"iata": "LHR",
			"icao": "EGLL",
			"latitude": 51.4706,
			"longitude": -0.461941,
			"altitude": 83,
			"country": "United Kingdom"
		}}}
	}))
	.await;
	let client = client_for(&upstream.base_url);

	let airport = client.get_airport("LHR").await.unwrap();

	assert_eq!(airport.name, "London Heathrow Airport");
	assert_eq!(airport.altitude, Some(83));

	let request = upstream.last_request();
	assert_eq!(request.path, "/v1/airports");
	assert_eq!(request.query.as_deref(), Some("iata=LHR"));
	assert_eq!(
		request.headers["authorization"],
		format!("Bearer {}", TEST_API_KEY).as_str()
	);
	assert_eq!(request.headers["accept"], "application/json");
	assert_eq!(request.headers["accept-version"], "v1");
	assert!(request.headers["user-agent"]
		.to_str()
		.unwrap()
		.starts_with("fr24-gateway/"));

	upstream.abort();
}

#[tokio::test]
async fn test_search_flights_missing_envelope_is_empty() {
	let upstream = MockUpstream::spawn_json(json!({ "result": { "response": {} } })).await;
	let client = client_for(&upstream.base_url);

	let filters = FlightSearchFilters {
		flight_iata: Some("BA123".to_string()),
		limit: Some(10),
		..Default::default()
	};
	let flights = client.search_flights(&filters).await.unwrap();

	assert!(flights.is_empty());
	let request = upstream.last_request();
	assert_eq!(request.path, "/v1/flights");
	assert_eq!(request.query.as_deref(), Some("flight_iata=BA123&limit=10"));

	upstream.abort();
}

#[tokio::test]
async fn test_zone_query_bounds_parameter() {
	let upstream = MockUpstream::spawn_json(json!({
		"result": { "response": { "flights": [
			{ "id": "2f8a1c3d", "callsign": "BAW123", "lat": 51.5, "lng": -0.2, "alt": 3500, "speed": 220, "heading": 270, "timestamp": 1700000000 }
		]}}
	}))
	.await;
	let client = client_for(&upstream.base_url);

	let bounds = GeoBounds::new(52.0, 51.0, -1.5, 0.5).unwrap();
	let flights = client.get_flights_in_zone(&bounds).await.unwrap();

	assert_eq!(flights.len(), 1);
	assert_eq!(flights[0].position.altitude, 3500);
	assert_eq!(
		upstream.last_request().query.as_deref(),
		Some("bounds=52%2C51%2C-1.5%2C0.5")
	);

	upstream.abort();
}

#[tokio::test]
async fn test_unauthorized_is_not_retried() {
	let upstream = MockUpstream::spawn(vec![
		ScriptedReply::json(401, json!({ "message": "Unauthenticated." })),
		ScriptedReply::json(200, json!({})),
	])
	.await;
	let client = client_for(&upstream.base_url);

	let err = client.get_airline("BAW").await.unwrap_err();

	assert!(matches!(err, ClientError::Authentication));
	assert_eq!(upstream.request_count(), 1);
	assert_eq!(upstream.last_request().query.as_deref(), Some("icao=BAW"));

	upstream.abort();
}

#[tokio::test]
async fn test_rate_limit_retried_until_success() {
	let upstream = MockUpstream::spawn(vec![
		ScriptedReply::text(429, "slow down"),
		ScriptedReply::text(429, "slow down"),
		ScriptedReply::json(
			200,
			json!({ "result": { "response": { "aircraft": { "registration": "G-EUUA", "type": "A320" } } } }),
		),
	])
	.await;
	let client = client_for(&upstream.base_url);

	let aircraft = client.get_aircraft("G-EUUA").await.unwrap();

	assert_eq!(aircraft.type_code.as_deref(), Some("A320"));
	assert_eq!(upstream.request_count(), 3);
	assert!(upstream
		.requests()
		.iter()
		.all(|r| r.path == "/v1/aircraft/G-EUUA"));

	upstream.abort();
}

#[tokio::test]
async fn test_rate_limit_exhausted() {
	let upstream = MockUpstream::spawn(vec![ScriptedReply::text(429, "slow down"); 5]).await;
	let config = ClientConfig::new(TEST_API_KEY)
		.unwrap()
		.with_base_url(upstream.base_url.clone())
		.with_retry_policy(fast_retry(1));
	let client = FlightDataClient::new(config).unwrap();

	let err = client.get_flight_detail("2f8a1c3d").await.unwrap_err();

	assert!(matches!(err, ClientError::RateLimitExceeded { attempts: 2 }));
	assert_eq!(upstream.request_count(), 2);

	upstream.abort();
}

#[tokio::test]
async fn test_server_error_carries_status_and_body() {
	let upstream =
		MockUpstream::spawn(vec![ScriptedReply::text(500, "internal failure")]).await;
	let client = client_for(&upstream.base_url);

	let err = client.get_airport("EGLL").await.unwrap_err();

	match err {
		ClientError::Upstream { status_code, body } => {
			assert_eq!(status_code, 500);
			assert_eq!(body, "internal failure");
		},
		other => panic!("expected upstream error, got {:?}", other),
	}
	assert_eq!(upstream.request_count(), 1);

	upstream.abort();
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
	let client = client_for(&closed_port_url().await);

	let err = client.get_airport("LHR").await.unwrap_err();

	assert!(matches!(err, ClientError::Network(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_request_timeout_is_network_error() {
	let upstream = MockUpstream::spawn(vec![
		ScriptedReply::json(200, json!({})).after(Duration::from_millis(500))
	])
	.await;
	let config = ClientConfig::new(TEST_API_KEY)
		.unwrap()
		.with_base_url(upstream.base_url.clone())
		.with_timeout(Duration::from_millis(50));
	let client = FlightDataClient::new(config).unwrap();

	let err = client.get_airport("LHR").await.unwrap_err();

	assert!(matches!(err, ClientError::Network(_)), "got {:?}", err);
	assert_eq!(upstream.request_count(), 1);

	upstream.abort();
}

#[tokio::test]
async fn test_non_json_success_body() {
	let upstream = MockUpstream::spawn(vec![ScriptedReply::text(200, "<html>")]).await;
	let client = client_for(&upstream.base_url);

	let err = client.search_airports(&Default::default()).await.unwrap_err();

	assert!(matches!(err, ClientError::InvalidResponse { .. }));

	upstream.abort();
}
