//! FR24 Client
//!
//! Data-access layer for the Flightradar24 API: an authenticated transport with
//! rate-limit backoff, plus the domain mapping that unwraps each endpoint's
//! response envelope into the records defined in `fr24-types`.

pub mod client;
pub mod envelope;
pub mod retry;
pub mod timer;
pub mod transport;
mod wire;

#[cfg(test)]
pub(crate) mod test_utils;

pub use client::{airline_code_param, airport_code_param, FlightDataClient};
pub use fr24_types::{ClientError, ClientResult, FlightDataProvider};
pub use retry::RetryingTransport;
pub use timer::{BackoffTimer, TokioTimer};
pub use transport::{HttpTransport, RawResponse, ReqwestTransport};
