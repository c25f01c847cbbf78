//! Client platform classification.

use serde::{Deserialize, Serialize};

/// iOS device signatures in user-agent strings.
const IOS_MARKERS: [&str; 3] = ["iPhone", "iPad", "iPod"];

/// Android device signature in user-agent strings.
const ANDROID_MARKER: &str = "Android";

/// The mobile platform a client was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
	/// iPhone, iPad or iPod client
	Ios,
	/// Android client
	Android,
	/// Anything else; deeplink opens are a no-op on this platform
	Unknown,
}

impl Platform {
	/// Lowercase platform name.
	pub fn name(&self) -> &'static str {
		match self {
			Platform::Ios => "ios",
			Platform::Android => "android",
			Platform::Unknown => "unknown",
		}
	}

	/// Whether this is a recognized mobile platform.
	pub fn is_mobile(&self) -> bool {
		!matches!(self, Platform::Unknown)
	}
}

/// Classifies a client identity string into a [`Platform`].
///
/// A trait so tests and unusual hosts can inject synthetic identity
/// strings or their own detection rules.
pub trait PlatformClassifier: Send + Sync {
	fn classify(&self, user_agent: &str) -> Platform;
}

/// Default classifier matching known device signatures as substrings.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserAgentClassifier;

impl PlatformClassifier for UserAgentClassifier {
	fn classify(&self, user_agent: &str) -> Platform {
		// Order matters: iOS markers are checked first, so a user agent
		// carrying both iOS and Android signatures classifies as iOS.
		if IOS_MARKERS.iter().any(|marker| user_agent.contains(marker)) {
			Platform::Ios
		} else if user_agent.contains(ANDROID_MARKER) {
			Platform::Android
		} else {
			Platform::Unknown
		}
	}
}
