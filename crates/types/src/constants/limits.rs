//! Global limits and defaults for configuration and runtime

/// Production base address of the upstream data API
pub const DEFAULT_BASE_URL: &str = "https://api.flightradar24.com/v1";

/// Environment variable holding the upstream API credential
pub const DEFAULT_API_KEY_ENV: &str = "FR24_API_KEY";

/// Default per-request timeout in milliseconds
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000; // 10s

/// Default delay before the first retry of a rate-limited request
pub const DEFAULT_RETRY_INITIAL_DELAY_MS: u64 = 1_000; // 1s

/// Default exponential backoff multiplier
pub const DEFAULT_RETRY_MULTIPLIER: u32 = 2;

/// Default number of retries after a rate-limited response
pub const DEFAULT_RETRY_MAX_ATTEMPTS: u32 = 3;

/// Upper bound accepted for the retry count
pub const MAX_RETRY_ATTEMPTS: u32 = 10;

/// Default result limit for search operations
pub const DEFAULT_SEARCH_LIMIT: u32 = 10;

/// Maximum result limit for search operations
pub const MAX_SEARCH_LIMIT: u32 = 100;
