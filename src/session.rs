//! The deeplink session and its launch-with-fallback race.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

use crate::config::DeeplinkConfig;
use crate::host::NavigationHost;
use crate::platform::{Platform, PlatformClassifier, UserAgentClassifier};
use crate::time::{SystemTimeProvider, TimeProvider};

/// Terminal state of one `open` call's race.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
	/// The probe's load event fired before the fallback timer; the page
	/// navigated to the original URI.
	Intercepted,
	/// The fallback timer won and a store link existed within the elapsed
	/// window; the page navigated to the store.
	StoreRedirect,
	/// The fallback timer won but no link could be produced or the timer
	/// fired outside the elapsed window; nothing happened.
	Suppressed,
}

/// A deeplink session bound to one hosting page.
///
/// Owns the configuration and platform classification that the original
/// keeps in module-level globals; one instance per page preserves the
/// single-session semantics while staying testable.
///
/// [`configure`](Self::configure) must run before
/// [`open`](Self::open) does anything: a session starts out classified as
/// [`Platform::Unknown`] and opens on an unknown platform are silent
/// no-ops.
pub struct DeeplinkSession {
	host: Arc<dyn NavigationHost>,
	clock: Arc<dyn TimeProvider>,
	classifier: Arc<dyn PlatformClassifier>,
	state: Arc<Mutex<SessionState>>,
}

struct SessionState {
	config: DeeplinkConfig,
	platform: Platform,
	// At most one outstanding fallback per session; replaced handles are
	// aborted before a new race is armed.
	pending: Option<JoinHandle<()>>,
}

impl DeeplinkSession {
	/// Creates a session with the system clock and the default
	/// user-agent classifier.
	pub fn new(host: Arc<dyn NavigationHost>) -> Self {
		Self::with_providers(
			host,
			Arc::new(SystemTimeProvider::new()),
			Arc::new(UserAgentClassifier),
		)
	}

	/// Creates a session with injected clock and classifier.
	pub fn with_providers(
		host: Arc<dyn NavigationHost>,
		clock: Arc<dyn TimeProvider>,
		classifier: Arc<dyn PlatformClassifier>,
	) -> Self {
		Self {
			host,
			clock,
			classifier,
			state: Arc::new(Mutex::new(SessionState {
				config: DeeplinkConfig::default(),
				platform: Platform::Unknown,
				pending: None,
			})),
		}
	}

	/// Replaces the session configuration and re-classifies the client.
	///
	/// The platform is derived from the host's user-agent string exactly
	/// once per call and never re-evaluated until the next `configure`.
	/// Never fails: advisory validation findings are logged and the
	/// configuration is installed regardless.
	pub fn configure(&self, config: DeeplinkConfig) {
		if let Err(error) = config.validate() {
			tracing::warn!(%error, "deeplink configuration failed advisory validation");
		}

		let platform = match self.host.user_agent() {
			Some(user_agent) => self.classifier.classify(&user_agent),
			None => Platform::Unknown,
		};
		tracing::debug!(platform = platform.name(), "classified client platform");

		let mut state = self.state.lock();
		state.config = config;
		state.platform = platform;
	}

	/// Tries to launch the native app behind `uri`, falling back to the
	/// app store if it does not intercept the attempt in time.
	///
	/// Returns immediately; the race runs on a spawned task, so this must
	/// be called from within a tokio runtime. On an unrecognized platform
	/// this is a silent no-op: no probe, no timer, no navigation.
	pub fn open(&self, uri: &str) {
		let (platform, delay) = {
			let state = self.state.lock();
			(state.platform, state.config.delay())
		};

		if !platform.is_mobile() {
			tracing::debug!(uri, "ignoring deeplink open on unrecognized platform");
			return;
		}

		// Cancel before attach: a fresh open supersedes any fallback
		// still pending from the previous one.
		if let Some(previous) = self.state.lock().pending.take() {
			previous.abort();
		}

		let start = self.clock.now();
		let probe = self.host.attach_probe(uri);

		let host = Arc::clone(&self.host);
		let clock = Arc::clone(&self.clock);
		let shared = Arc::clone(&self.state);
		let uri = uri.to_string();

		let race = tokio::spawn(async move {
			let outcome = tokio::select! {
				// The OS intercepting the custom scheme suppresses the
				// load event, so a completion here means the app is not
				// handling the URI in-page and the page itself should.
				_ = probe.loaded() => {
					host.detach_probe();
					host.navigate(&uri);
					LaunchOutcome::Intercepted
				}
				_ = clock.sleep(delay) => {
					// Link and window come from the live configuration at
					// fire time, not a snapshot taken when the race armed.
					let (link, window) = {
						let state = shared.lock();
						(
							state.config.store_link(state.platform),
							state.config.delay() + state.config.delta(),
						)
					};
					let elapsed = clock.now() - start;
					match link {
						// The elapsed re-check suppresses a timer
						// resurrected long after the original gesture,
						// e.g. when the page was backgrounded and the
						// user has since come back.
						Some(link) if elapsed < window => {
							host.navigate(&link);
							LaunchOutcome::StoreRedirect
						}
						_ => LaunchOutcome::Suppressed,
					}
				}
			};
			tracing::debug!(uri = %uri, outcome = ?outcome, "deeplink attempt resolved");
		});

		self.state.lock().pending = Some(race);
	}
}
