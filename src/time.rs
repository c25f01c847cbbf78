//! Clock abstraction for the launch race.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::RwLock;
use tokio::sync::watch;
use tokio::time::Instant;

/// Trait for providing time to the launch race.
/// This allows for time mocking in tests.
#[async_trait]
pub trait TimeProvider: Send + Sync {
	fn now(&self) -> Instant;

	/// Suspends until `duration` has passed on this provider's clock.
	async fn sleep(&self, duration: Duration);
}

/// System time provider that uses the actual tokio clock.
#[derive(Clone, Default)]
pub struct SystemTimeProvider;

impl SystemTimeProvider {
	pub fn new() -> Self {
		Self
	}
}

#[async_trait]
impl TimeProvider for SystemTimeProvider {
	fn now(&self) -> Instant {
		Instant::now()
	}

	async fn sleep(&self, duration: Duration) {
		tokio::time::sleep(duration).await;
	}
}

/// Mock time provider for testing that allows manual time control.
///
/// `sleep` completes once `advance`/`set_time` moves the clock past the
/// deadline; no real timers are involved, so a test can make a fallback
/// fire "late" by jumping the clock in one step.
#[derive(Clone)]
pub struct MockTimeProvider {
	inner: Arc<MockTimeInner>,
}

struct MockTimeInner {
	current_time: RwLock<Instant>,
	// Version counter bumped on every clock mutation; sleepers wait on it.
	tick: watch::Sender<u64>,
}

impl MockTimeProvider {
	pub fn new(start_time: Instant) -> Self {
		let (tick, _) = watch::channel(0);
		Self {
			inner: Arc::new(MockTimeInner {
				current_time: RwLock::new(start_time),
				tick,
			}),
		}
	}

	pub fn advance(&self, duration: Duration) {
		{
			let mut time = self.inner.current_time.write();
			*time += duration;
		}
		self.inner
			.tick
			.send_modify(|version| *version = version.wrapping_add(1));
	}

	pub fn set_time(&self, time: Instant) {
		{
			let mut current = self.inner.current_time.write();
			*current = time;
		}
		self.inner
			.tick
			.send_modify(|version| *version = version.wrapping_add(1));
	}
}

impl Default for MockTimeProvider {
	fn default() -> Self {
		Self::new(Instant::now())
	}
}

#[async_trait]
impl TimeProvider for MockTimeProvider {
	fn now(&self) -> Instant {
		*self.inner.current_time.read()
	}

	async fn sleep(&self, duration: Duration) {
		let deadline = self.now() + duration;
		let mut ticks = self.inner.tick.subscribe();
		while self.now() < deadline {
			if ticks.changed().await.is_err() {
				return;
			}
		}
	}
}
