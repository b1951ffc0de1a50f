//! FR24 Service
//!
//! Caller-facing layer of the gateway: tool catalogue and argument validation,
//! resource URI addressing, presentation formatting, and the JSON-RPC dispatcher.

pub mod errors;
pub mod gateway;
pub mod presentation;
pub mod protocol;
pub mod resources;
pub mod tools;

#[cfg(test)]
pub(crate) mod test_utils;

pub use errors::ServiceError;
pub use gateway::FlightGateway;
pub use protocol::{RpcDispatcher, RpcError, RpcResponse};
pub use resources::{resource_templates, ResourceTemplate, ResourceUri};
pub use tools::{tool_catalogue, ToolDescriptor, ToolName, ToolRequest};
