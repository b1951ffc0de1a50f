//! Sleep abstraction for retry backoff

use async_trait::async_trait;
use std::fmt::Debug;
use std::time::Duration;

/// Suspends the calling operation for a backoff delay
///
/// Production code uses [`TokioTimer`]; tests substitute a recording clock so backoff
/// schedules can be asserted without waiting.
#[async_trait]
pub trait BackoffTimer: Send + Sync + Debug {
	async fn sleep(&self, delay: Duration);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TokioTimer;

#[async_trait]
impl BackoffTimer for TokioTimer {
	async fn sleep(&self, delay: Duration) {
		tokio::time::sleep(delay).await;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test(start_paused = true)]
	async fn test_tokio_timer_sleeps_for_delay() {
		let start = tokio::time::Instant::now();
		TokioTimer.sleep(Duration::from_secs(4)).await;
		assert_eq!(start.elapsed(), Duration::from_secs(4));
	}
}
