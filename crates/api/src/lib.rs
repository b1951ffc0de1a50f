//! FR24 API
//!
//! Axum routes and middleware exposing the gateway's JSON-RPC endpoint.

pub mod handlers;
pub mod router;
pub mod security;
pub mod state;

pub use router::create_router;
pub use state::AppState;
