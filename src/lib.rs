//! FR24 Gateway Library
//!
//! Exposes the Flightradar24 data API to tool-calling agents: an authenticated,
//! rate-limit aware upstream client behind a JSON-RPC tool and resource surface.

// Core domain types
pub use fr24_types::{
	// External dependencies for convenience
	serde_json,
	AircraftRecord,
	AirlineRecord,
	AirportRecord,
	AirportSearchFilters,
	ClientConfig,
	// Error types
	ClientError,
	ClientResult,
	FlightDataProvider,
	FlightDetail,
	FlightSearchFilters,
	FlightSummary,
	GeoBounds,
	RetryPolicy,
	SecretString,
};

// Upstream client
pub use fr24_client::{FlightDataClient, HttpTransport, ReqwestTransport, RetryingTransport};

// Service layer
pub use fr24_service::{FlightGateway, RpcDispatcher, ServiceError, ToolRequest};

// API layer
pub use fr24_api::{create_router, AppState};

// Config
pub use fr24_config::{
	load_config, log_service_info, log_service_shutdown, log_startup_complete, Settings,
};

pub mod models {
	pub use fr24_types::*;
}

pub mod config {
	pub use fr24_config::*;
}

pub mod client {
	pub use fr24_client::*;
}

pub mod service {
	pub use fr24_service::*;
}

pub mod api {
	pub use fr24_api::*;
}

pub mod mocks;

use std::net::SocketAddr;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::info;

// Re-export external dependencies for demos
pub use async_trait;

/// Builder wiring settings, the upstream provider, and the HTTP surface
#[derive(Default)]
pub struct GatewayBuilder {
	settings: Option<Settings>,
	provider: Option<Arc<dyn FlightDataProvider>>,
	shutdown: CancellationToken,
}

impl GatewayBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Set custom settings
	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Use `provider` instead of building a client from the upstream settings
	pub fn with_provider(mut self, provider: Arc<dyn FlightDataProvider>) -> Self {
		self.provider = Some(provider);
		self
	}

	pub fn settings(&self) -> Option<&Settings> {
		self.settings.as_ref()
	}

	/// Token cancelled when the server shuts down; aborts in-flight upstream retries
	pub fn shutdown_token(&self) -> CancellationToken {
		self.shutdown.clone()
	}

	/// Initialize tracing with configuration-based settings
	fn init_tracing_from_settings(settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
		use fr24_config::LogFormat;

		// RUST_LOG wins over the configured level
		let log_level = &settings.logging.level;
		let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));
		let structured = settings.logging.structured;

		let result = match settings.logging.format {
			LogFormat::Json => tracing_subscriber::fmt()
				.json()
				.with_env_filter(env_filter)
				.with_target(structured)
				.with_thread_ids(structured)
				.try_init(),
			LogFormat::Pretty => tracing_subscriber::fmt()
				.pretty()
				.with_env_filter(env_filter)
				.with_target(structured)
				.with_thread_ids(structured)
				.try_init(),
			LogFormat::Compact => tracing_subscriber::fmt()
				.compact()
				.with_env_filter(env_filter)
				.with_target(structured)
				.with_thread_ids(structured)
				.try_init(),
		};
		result.map_err(|e| format!("Failed to initialise tracing: {}", e))?;

		info!(
			"Logging configuration applied: level={}, format={:?}, structured={}",
			settings.logging.level, settings.logging.format, settings.logging.structured
		);

		Ok(())
	}

	fn build_provider(
		&self,
		settings: &Settings,
	) -> Result<Arc<dyn FlightDataProvider>, Box<dyn std::error::Error>> {
		if let Some(provider) = &self.provider {
			return Ok(Arc::clone(provider));
		}

		let config = settings.upstream.client_config()?;
		let client = FlightDataClient::new(config)?.with_cancellation(self.shutdown.clone());
		info!("Upstream client ready for {}", client.base_url());

		Ok(Arc::new(client))
	}

	/// Build the router with its state
	///
	/// Fails when the settings are invalid or no upstream credential can be resolved.
	pub async fn start(self) -> Result<(axum::Router, AppState), Box<dyn std::error::Error>> {
		let settings = self.settings.clone().unwrap_or_default();
		settings.validate()?;

		let provider = self.build_provider(&settings)?;
		let dispatcher = RpcDispatcher::new(FlightGateway::new(provider));
		let app_state = AppState::new(dispatcher);

		let router = create_router().with_state(app_state.clone());

		Ok((router, app_state))
	}

	/// Start the complete server
	///
	/// Loads `.env` and the configuration (unless settings were provided), initialises
	/// tracing, binds the listener, and serves until ctrl-c.
	pub async fn start_server(mut self) -> Result<(), Box<dyn std::error::Error>> {
		dotenvy::dotenv().ok();

		let using_provided_settings = self.settings.is_some();
		let settings = match self.settings.take() {
			Some(settings) => settings,
			None => load_config()?,
		};

		Self::init_tracing_from_settings(&settings)?;
		log_service_info(&settings);
		info!(
			"Using configuration: loaded from {}",
			if using_provided_settings {
				"provided settings"
			} else {
				"config file, environment, or defaults"
			}
		);

		let bind_addr = settings.bind_address();
		let addr: SocketAddr = bind_addr
			.parse()
			.map_err(|e| format!("Invalid bind address '{}': {}", bind_addr, e))?;

		self.settings = Some(settings);
		let shutdown = self.shutdown_token();
		let (app, _) = self.start().await?;

		let listener = tokio::net::TcpListener::bind(addr).await?;

		log_startup_complete(&bind_addr);
		info!("API endpoints available:");
		info!("  GET  /health");
		info!("  POST /mcp");

		axum::serve(listener, app)
			.with_graceful_shutdown(shutdown_signal(shutdown))
			.await?;

		Ok(())
	}
}

async fn shutdown_signal(shutdown: CancellationToken) {
	tokio::select! {
		result = tokio::signal::ctrl_c() => {
			if let Err(e) = result {
				tracing::error!("Failed to listen for shutdown signal: {}", e);
			}
		},
		_ = shutdown.cancelled() => {},
	}
	shutdown.cancel();
	log_service_shutdown();
}
