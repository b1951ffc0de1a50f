//! Service startup logging for the FR24 gateway

use std::env;
use tracing::info;

use crate::Settings;

/// Logs service information at startup
pub fn log_service_info(settings: &Settings) {
	let service_name = "fr24-gateway";
	let service_version = env!("CARGO_PKG_VERSION");

	info!("=== FR24 Gateway Starting ===");
	info!("🚀 Service: {} v{}", service_name, service_version);
	info!("💻 Platform: {} ({})", env::consts::OS, env::consts::ARCH);

	if let Ok(cwd) = env::current_dir() {
		info!("📁 Working Directory: {}", cwd.display());
	}

	if let Ok(rust_log) = env::var("RUST_LOG") {
		info!("🔧 Log Level: {}", rust_log);
	}

	info!("🛰️ Upstream: {}", settings.upstream.base_url);
	info!(
		"⏱️ Request timeout: {}ms, retry: {} attempts from {}ms x{}",
		settings.upstream.timeout_ms,
		settings.upstream.retry.max_attempts,
		settings.upstream.retry.initial_delay_ms,
		settings.upstream.retry.multiplier
	);
	info!("🔑 Credential source: {}", settings.upstream.api_key.description());
	info!(
		"🕒 Started at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}

/// Logs service shutdown information
pub fn log_service_shutdown() {
	info!("🛑 FR24 Gateway Shutting Down");
	info!(
		"🕒 Shutdown at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}

/// Logs startup completion
pub fn log_startup_complete(bind_address: &str) {
	info!("✅ FR24 Gateway Started Successfully");
	info!("🌐 Server listening on: {}", bind_address);
	info!("📡 Ready to accept tool calls on /mcp");
}
