//! Scripted transport and recording clock shared by the unit tests

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::timer::BackoffTimer;
use crate::transport::{HttpTransport, RawResponse};
use fr24_types::{ClientError, ClientResult};

/// Transport that replays a fixed list of outcomes and records every request
#[derive(Debug, Default)]
pub struct ScriptedTransport {
	script: Mutex<VecDeque<ClientResult<RawResponse>>>,
	requests: Mutex<Vec<(String, Vec<(String, String)>)>>,
	calls: AtomicUsize,
}

impl ScriptedTransport {
	pub fn new(script: Vec<ClientResult<RawResponse>>) -> Self {
		Self {
			script: Mutex::new(script.into()),
			requests: Mutex::new(Vec::new()),
			calls: AtomicUsize::new(0),
		}
	}

	/// Transport that answers once with `200` and `body`
	pub fn ok_json(body: serde_json::Value) -> Self {
		Self::new(vec![Ok(RawResponse::new(200, body.to_string()))])
	}

	pub fn call_count(&self) -> usize {
		self.calls.load(Ordering::Relaxed)
	}

	pub fn requests(&self) -> Vec<(String, Vec<(String, String)>)> {
		self.requests.lock().unwrap().clone()
	}

	pub fn last_request(&self) -> (String, Vec<(String, String)>) {
		self.requests()
			.pop()
			.expect("no request was recorded")
	}
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
	async fn get(&self, url: &str, query: &[(String, String)]) -> ClientResult<RawResponse> {
		self.calls.fetch_add(1, Ordering::Relaxed);
		self.requests
			.lock()
			.unwrap()
			.push((url.to_string(), query.to_vec()));

		self.script
			.lock()
			.unwrap()
			.pop_front()
			.unwrap_or_else(|| Err(ClientError::Network("script exhausted".to_string())))
	}
}

/// Clock that records requested delays instead of sleeping
#[derive(Debug, Default)]
pub struct RecordingTimer {
	delays: Mutex<Vec<Duration>>,
	cancel_on_sleep: Option<CancellationToken>,
}

impl RecordingTimer {
	/// Timer that cancels `token` and then never wakes up
	pub fn cancelling(token: CancellationToken) -> Self {
		Self {
			delays: Mutex::new(Vec::new()),
			cancel_on_sleep: Some(token),
		}
	}

	pub fn delays(&self) -> Vec<Duration> {
		self.delays.lock().unwrap().clone()
	}
}

#[async_trait]
impl BackoffTimer for RecordingTimer {
	async fn sleep(&self, delay: Duration) {
		self.delays.lock().unwrap().push(delay);
		if let Some(token) = &self.cancel_on_sleep {
			token.cancel();
			std::future::pending::<()>().await;
		}
	}
}
