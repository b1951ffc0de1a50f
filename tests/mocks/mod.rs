//! Shared servers and fixtures for the integration tests

pub mod test_server;
pub mod upstream;

#[allow(unused_imports)]
pub use test_server::TestServer;
#[allow(unused_imports)]
pub use upstream::{MockUpstream, RecordedRequest, ScriptedReply};

/// Credential used by every test that talks to the mock upstream
#[allow(dead_code)]
pub const TEST_API_KEY: &str = "test-api-key-123";
