use std::sync::Arc;

use fr24_service::RpcDispatcher;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
	pub dispatcher: Arc<RpcDispatcher>,
}

impl AppState {
	pub fn new(dispatcher: RpcDispatcher) -> Self {
		Self {
			dispatcher: Arc::new(dispatcher),
		}
	}
}
