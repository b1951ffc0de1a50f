pub mod common;
pub mod health;
pub mod mcp;

pub use common::not_found;
pub use health::health;
pub use mcp::post_mcp;
