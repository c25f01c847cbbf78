//! Session configuration and store link synthesis.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{
	DeeplinkError, validate_android_package, validate_ios_app_id, validate_store_url,
};
use crate::platform::Platform;

const DEFAULT_DELAY_MS: u64 = 1000;
const DEFAULT_DELTA_MS: u64 = 500;

fn default_delay_ms() -> u64 {
	DEFAULT_DELAY_MS
}

fn default_delta_ms() -> u64 {
	DEFAULT_DELTA_MS
}

/// App Store descriptor for the iOS side of a deeplink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IosApp {
	/// Numeric App Store identifier (e.g. `123456789`)
	#[serde(default)]
	pub app_id: String,

	/// App Store listing name, as it appears in the store URL path
	#[serde(default)]
	pub app_name: String,

	/// Explicit store URL; always wins over the synthesized link
	pub store_url: Option<String>,
}

impl IosApp {
	/// Creates a builder for an iOS app descriptor.
	pub fn builder() -> IosAppBuilder {
		IosAppBuilder::default()
	}

	/// The App Store link for this descriptor.
	///
	/// An explicit `store_url` wins. Otherwise the `itms-apps://` link is
	/// synthesized from `app_name` and `app_id`; if either is unset no
	/// link can be produced.
	pub fn store_link(&self) -> Option<String> {
		if let Some(url) = &self.store_url {
			return Some(url.clone());
		}
		if self.app_name.is_empty() || self.app_id.is_empty() {
			return None;
		}
		Some(format!(
			"itms-apps://itunes.apple.com/app/{}/id{}?mt=8",
			self.app_name, self.app_id
		))
	}
}

/// Builder for [`IosApp`].
#[derive(Debug, Default)]
pub struct IosAppBuilder {
	app_id: String,
	app_name: String,
	store_url: Option<String>,
}

impl IosAppBuilder {
	/// Sets the numeric App Store identifier.
	pub fn app_id(mut self, app_id: impl Into<String>) -> Self {
		self.app_id = app_id.into();
		self
	}

	/// Sets the App Store listing name.
	pub fn app_name(mut self, app_name: impl Into<String>) -> Self {
		self.app_name = app_name.into();
		self
	}

	/// Sets an explicit store URL override.
	pub fn store_url(mut self, store_url: impl Into<String>) -> Self {
		self.store_url = Some(store_url.into());
		self
	}

	/// Builds the descriptor.
	pub fn build(self) -> IosApp {
		IosApp {
			app_id: self.app_id,
			app_name: self.app_name,
			store_url: self.store_url,
		}
	}
}

/// Google Play descriptor for the Android side of a deeplink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AndroidApp {
	/// Application package name (e.g. `com.example.app`)
	#[serde(default)]
	pub app_id: String,

	/// Explicit store URL; always wins over the synthesized link
	pub store_url: Option<String>,
}

impl AndroidApp {
	/// Creates a builder for an Android app descriptor.
	pub fn builder() -> AndroidAppBuilder {
		AndroidAppBuilder::default()
	}

	/// The Google Play link for this descriptor.
	///
	/// An explicit `store_url` wins; otherwise the Play link is
	/// synthesized from `app_id`, and an unset `app_id` produces none.
	pub fn store_link(&self) -> Option<String> {
		if let Some(url) = &self.store_url {
			return Some(url.clone());
		}
		if self.app_id.is_empty() {
			return None;
		}
		Some(format!(
			"https://play.google.com/store/apps/details?id={}",
			self.app_id
		))
	}
}

/// Builder for [`AndroidApp`].
#[derive(Debug, Default)]
pub struct AndroidAppBuilder {
	app_id: String,
	store_url: Option<String>,
}

impl AndroidAppBuilder {
	/// Sets the application package name.
	pub fn app_id(mut self, app_id: impl Into<String>) -> Self {
		self.app_id = app_id.into();
		self
	}

	/// Sets an explicit store URL override.
	pub fn store_url(mut self, store_url: impl Into<String>) -> Self {
		self.store_url = Some(store_url.into());
		self
	}

	/// Builds the descriptor.
	pub fn build(self) -> AndroidApp {
		AndroidApp {
			app_id: self.app_id,
			store_url: self.store_url,
		}
	}
}

/// Configuration for a deeplink session.
///
/// Timing fields are plain milliseconds so configurations deserialize the
/// way they are written down; unset fields take the documented defaults.
/// App descriptors are replaced wholesale when re-supplied, never
/// field-merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeeplinkConfig {
	/// iOS app descriptor, if the app ships on iOS
	#[serde(default)]
	pub ios: Option<IosApp>,

	/// Android app descriptor, if the app ships on Android
	#[serde(default)]
	pub android: Option<AndroidApp>,

	/// Time to wait before assuming the native app did not intercept the
	/// attempt (default 1000)
	#[serde(default = "default_delay_ms")]
	pub delay_ms: u64,

	/// Grace window added to `delay_ms` to tolerate scheduler jitter
	/// (default 500)
	#[serde(default = "default_delta_ms")]
	pub delta_ms: u64,
}

impl Default for DeeplinkConfig {
	fn default() -> Self {
		Self {
			ios: None,
			android: None,
			delay_ms: DEFAULT_DELAY_MS,
			delta_ms: DEFAULT_DELTA_MS,
		}
	}
}

impl DeeplinkConfig {
	/// Creates a builder seeded with the defaults.
	pub fn builder() -> DeeplinkConfigBuilder {
		DeeplinkConfigBuilder::default()
	}

	/// The fallback delay as a [`Duration`].
	pub fn delay(&self) -> Duration {
		Duration::from_millis(self.delay_ms)
	}

	/// The jitter grace window as a [`Duration`].
	pub fn delta(&self) -> Duration {
		Duration::from_millis(self.delta_ms)
	}

	/// The store link for `platform`, if one can be produced.
	pub fn store_link(&self, platform: Platform) -> Option<String> {
		match platform {
			Platform::Ios => self.ios.as_ref().and_then(IosApp::store_link),
			Platform::Android => self.android.as_ref().and_then(AndroidApp::store_link),
			Platform::Unknown => None,
		}
	}

	/// Advisory validation of the configured identifiers.
	///
	/// The launch protocol never consults this; an invalid or incomplete
	/// configuration simply produces no store link. Callers that want to
	/// catch typos up front can check here, and
	/// [`DeeplinkSession::configure`](crate::DeeplinkSession::configure)
	/// logs the first finding.
	pub fn validate(&self) -> Result<(), DeeplinkError> {
		if let Some(ios) = &self.ios {
			if !ios.app_id.is_empty() {
				validate_ios_app_id(&ios.app_id)?;
			}
			if let Some(url) = &ios.store_url {
				validate_store_url(url)?;
			}
		}
		if let Some(android) = &self.android {
			if !android.app_id.is_empty() {
				validate_android_package(&android.app_id)?;
			}
			if let Some(url) = &android.store_url {
				validate_store_url(url)?;
			}
		}
		Ok(())
	}
}

/// Builder for [`DeeplinkConfig`].
#[derive(Debug)]
pub struct DeeplinkConfigBuilder {
	ios: Option<IosApp>,
	android: Option<AndroidApp>,
	delay_ms: u64,
	delta_ms: u64,
}

impl Default for DeeplinkConfigBuilder {
	fn default() -> Self {
		Self {
			ios: None,
			android: None,
			delay_ms: DEFAULT_DELAY_MS,
			delta_ms: DEFAULT_DELTA_MS,
		}
	}
}

impl DeeplinkConfigBuilder {
	/// Sets the iOS app descriptor, replacing any previous one wholesale.
	pub fn ios(mut self, app: IosApp) -> Self {
		self.ios = Some(app);
		self
	}

	/// Sets the Android app descriptor, replacing any previous one
	/// wholesale.
	pub fn android(mut self, app: AndroidApp) -> Self {
		self.android = Some(app);
		self
	}

	/// Sets the fallback delay in milliseconds.
	pub fn delay_ms(mut self, delay_ms: u64) -> Self {
		self.delay_ms = delay_ms;
		self
	}

	/// Sets the jitter grace window in milliseconds.
	pub fn delta_ms(mut self, delta_ms: u64) -> Self {
		self.delta_ms = delta_ms;
		self
	}

	/// Builds the configuration.
	pub fn build(self) -> DeeplinkConfig {
		DeeplinkConfig {
			ios: self.ios,
			android: self.android,
			delay_ms: self.delay_ms,
			delta_ms: self.delta_ms,
		}
	}
}
