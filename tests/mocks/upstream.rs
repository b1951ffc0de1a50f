//! Mock of the upstream flight data API
//!
//! Serves scripted replies in order from any path and records every request it
//! receives, so tests can assert on URLs, query strings, and headers.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
	extract::{Request, State},
	http::{HeaderMap, StatusCode},
	response::{IntoResponse, Response},
	Router,
};
use serde_json::{json, Value};
use tokio::task::JoinHandle;

#[derive(Debug, Clone)]
pub struct ScriptedReply {
	pub status: u16,
	pub body: String,
	pub delay: Option<Duration>,
}

#[allow(dead_code)]
impl ScriptedReply {
	pub fn json(status: u16, body: Value) -> Self {
		Self {
			status,
			body: body.to_string(),
			delay: None,
		}
	}

	pub fn text(status: u16, body: &str) -> Self {
		Self {
			status,
			body: body.to_string(),
			delay: None,
		}
	}

	pub fn after(mut self, delay: Duration) -> Self {
		self.delay = Some(delay);
		self
	}
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
	pub path: String,
	pub query: Option<String>,
	pub headers: HeaderMap,
}

#[derive(Default)]
struct Shared {
	replies: Mutex<VecDeque<ScriptedReply>>,
	requests: Mutex<Vec<RecordedRequest>>,
}

pub struct MockUpstream {
	/// Address to use as the client's base URL, including the `/v1` prefix
	pub base_url: String,
	shared: Arc<Shared>,
	handle: JoinHandle<()>,
}

#[allow(dead_code)]
impl MockUpstream {
	/// Spawn on an ephemeral port; unscripted requests get `200 {}`
	pub async fn spawn(replies: Vec<ScriptedReply>) -> Self {
		let shared = Arc::new(Shared {
			replies: Mutex::new(replies.into()),
			requests: Mutex::new(Vec::new()),
		});

		let app = Router::new()
			.fallback(reply)
			.with_state(Arc::clone(&shared));

		let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
			.await
			.expect("bind mock upstream port");
		let addr = listener.local_addr().unwrap();

		let handle = tokio::spawn(async move {
			let _ = axum::serve(listener, app).await;
		});

		Self {
			base_url: format!("http://{}/v1", addr),
			shared,
			handle,
		}
	}

	pub async fn spawn_json(body: Value) -> Self {
		Self::spawn(vec![ScriptedReply::json(200, body)]).await
	}

	pub fn requests(&self) -> Vec<RecordedRequest> {
		self.shared.requests.lock().unwrap().clone()
	}

	pub fn request_count(&self) -> usize {
		self.shared.requests.lock().unwrap().len()
	}

	pub fn last_request(&self) -> RecordedRequest {
		self.requests().pop().expect("no request reached the mock upstream")
	}

	pub fn abort(self) {
		self.handle.abort();
	}
}

async fn reply(State(shared): State<Arc<Shared>>, request: Request) -> Response {
	shared.requests.lock().unwrap().push(RecordedRequest {
		path: request.uri().path().to_string(),
		query: request.uri().query().map(str::to_string),
		headers: request.headers().clone(),
	});

	let next = shared.replies.lock().unwrap().pop_front();
	let scripted = next.unwrap_or_else(|| ScriptedReply::json(200, json!({})));

	if let Some(delay) = scripted.delay {
		tokio::time::sleep(delay).await;
	}

	let status = StatusCode::from_u16(scripted.status).unwrap();
	(status, [("content-type", "application/json")], scripted.body).into_response()
}

/// An address nothing is listening on
#[allow(dead_code)]
pub async fn closed_port_url() -> String {
	let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
	let addr = listener.local_addr().unwrap();
	drop(listener);
	format!("http://{}/v1", addr)
}
