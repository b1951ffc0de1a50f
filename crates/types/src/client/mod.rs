//! Client configuration, error taxonomy, and the provider trait

pub mod config;
pub mod errors;
pub mod traits;

pub use config::{ClientConfig, RetryPolicy};
pub use errors::ClientError;
pub use traits::FlightDataProvider;

/// Result type for data-access operations
pub type ClientResult<T> = Result<T, ClientError>;
