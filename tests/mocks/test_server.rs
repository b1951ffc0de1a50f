//! Gateway server for end-to-end tests

use std::sync::Arc;

use axum::Router;
use fr24_gateway::{FlightDataProvider, GatewayBuilder, Settings};
use tokio::task::JoinHandle;

/// Running gateway bound to an ephemeral port
pub struct TestServer {
	pub base_url: String,
	pub handle: JoinHandle<()>,
}

#[allow(dead_code)]
impl TestServer {
	/// Spawn a gateway answering from `provider`
	pub async fn spawn_with_provider(
		provider: Arc<dyn FlightDataProvider>,
	) -> Result<Self, Box<dyn std::error::Error>> {
		let (app, _) = GatewayBuilder::new()
			.with_provider(provider)
			.start()
			.await?;

		Self::spawn_server_with_app(app).await
	}

	/// Spawn a gateway whose real client talks to the upstream at `settings.upstream`
	pub async fn spawn_with_settings(settings: Settings) -> Result<Self, Box<dyn std::error::Error>> {
		let (app, _) = GatewayBuilder::new().with_settings(settings).start().await?;

		Self::spawn_server_with_app(app).await
	}

	async fn spawn_server_with_app(app: Router) -> Result<Self, Box<dyn std::error::Error>> {
		let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
		let addr = listener.local_addr()?;
		let base_url = format!("http://{}", addr);

		let handle = tokio::spawn(async move {
			let _ = axum::serve(listener, app).await;
		});

		Ok(Self { base_url, handle })
	}

	pub fn mcp_url(&self) -> String {
		format!("{}/mcp", self.base_url)
	}

	pub fn abort(self) {
		self.handle.abort();
	}
}
