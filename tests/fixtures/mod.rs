//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::{Mutex, RwLock};
use rstest::fixture;
use tokio::sync::Notify;

use deeplink_fallback::{
	AndroidApp, DeeplinkConfig, IosApp, NavigationHost, ProbeHandle, ProbeSignal,
};

/// Safari on an iPhone.
pub const IPHONE_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Mobile/15E148 Safari/604.1";

/// Safari on an iPad.
pub const IPAD_UA: &str = "Mozilla/5.0 (iPad; CPU OS 17_4 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Mobile/15E148 Safari/604.1";

/// Chrome on a Pixel.
pub const ANDROID_UA: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.6367.82 Mobile Safari/537.36";

/// Chrome on desktop Windows.
pub const DESKTOP_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Store links produced by [`complete_config`].
pub const PLAY_LINK: &str = "https://play.google.com/store/apps/details?id=com.example.app";
pub const ITMS_LINK: &str = "itms-apps://itunes.apple.com/app/foo/id123?mt=8";

/// A configuration with complete app profiles for both platforms.
#[fixture]
pub fn complete_config() -> DeeplinkConfig {
	DeeplinkConfig::builder()
		.ios(IosApp::builder().app_name("foo").app_id("123").build())
		.android(AndroidApp::builder().app_id("com.example.app").build())
		.build()
}

/// Lets every spawned task run until the executor has nothing left to do.
pub async fn settle() {
	for _ in 0..32 {
		tokio::task::yield_now().await;
	}
}

/// Scripted stand-in for the hosting page.
///
/// Records probe attaches, detaches and navigations, and lets a test fire
/// the probe's load event by completing the stored signal.
pub struct RecordingHost {
	user_agent: RwLock<Option<String>>,
	probes: Mutex<Vec<String>>,
	signals: Mutex<Vec<ProbeSignal>>,
	detach_count: AtomicUsize,
	navigations: Mutex<Vec<String>>,
	navigated: Notify,
}

impl RecordingHost {
	pub fn new(user_agent: Option<&str>) -> Arc<Self> {
		Arc::new(Self {
			user_agent: RwLock::new(user_agent.map(str::to_string)),
			probes: Mutex::new(Vec::new()),
			signals: Mutex::new(Vec::new()),
			detach_count: AtomicUsize::new(0),
			navigations: Mutex::new(Vec::new()),
			navigated: Notify::new(),
		})
	}

	/// Swaps the identity string the host reports from now on.
	pub fn set_user_agent(&self, user_agent: Option<&str>) {
		*self.user_agent.write() = user_agent.map(str::to_string);
	}

	/// Fires the load event of the most recently attached probe.
	pub fn complete_probe(&self) {
		let signal = self.signals.lock().pop().expect("no probe attached");
		signal.complete();
	}

	pub fn probes(&self) -> Vec<String> {
		self.probes.lock().clone()
	}

	pub fn detach_count(&self) -> usize {
		self.detach_count.load(Ordering::SeqCst)
	}

	pub fn navigations(&self) -> Vec<String> {
		self.navigations.lock().clone()
	}

	/// Resolves with the most recent navigation target, waiting for one
	/// to happen if none has yet.
	pub async fn wait_for_navigation(&self) -> String {
		loop {
			if let Some(last) = self.navigations.lock().last().cloned() {
				return last;
			}
			self.navigated.notified().await;
		}
	}
}

impl NavigationHost for RecordingHost {
	fn user_agent(&self) -> Option<String> {
		self.user_agent.read().clone()
	}

	fn attach_probe(&self, uri: &str) -> ProbeHandle {
		let (signal, handle) = ProbeHandle::pair();
		self.probes.lock().push(uri.to_string());
		self.signals.lock().push(signal);
		handle
	}

	fn detach_probe(&self) {
		self.detach_count.fetch_add(1, Ordering::SeqCst);
	}

	fn navigate(&self, url: &str) {
		self.navigations.lock().push(url.to_string());
		self.navigated.notify_one();
	}
}
