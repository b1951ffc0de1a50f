//! FR24 Types
//!
//! Shared domain records and traits for the Flightradar24 gateway.
//! This crate contains all domain models organized by business entity,
//! plus the client configuration and error taxonomy shared by every layer.

pub mod aircraft;
pub mod airlines;
pub mod airports;
pub mod client;
pub mod constants;
pub mod flights;
pub mod models;

// Re-export serde_json for convenience
pub use serde_json;

pub use aircraft::AircraftRecord;
pub use airlines::AirlineRecord;
pub use airports::{AirportRecord, AirportSearchFilters};
pub use client::{
	ClientConfig, ClientError, ClientResult, FlightDataProvider, RetryPolicy,
};
pub use flights::{
	AircraftInfo, AirlineInfo, AirportInfo, FlightDetail, FlightIdentification, FlightNumber,
	FlightSearchFilters, FlightStatus, FlightSummary, FlightTimes, Position, TimePair, TrackPoint,
	Velocity,
};
pub use models::{GeoBounds, GeoBoundsError, SecretString};
