//! Shared domain models used across the client, service, and config crates

pub mod geo;
pub mod nullable;
pub mod secret_string;

pub use geo::{GeoBounds, GeoBoundsError};
pub use secret_string::SecretString;
