//! App store fallback deep linking for mobile web clients.
//!
//! This crate tries to launch a native application through a custom-scheme
//! URI and, when the application does not intercept the attempt, redirects
//! the visitor to the platform's app store instead:
//!
//! - **Launch race**: an invisible probe attempts the custom scheme while a
//!   delayed fallback timer arms; whichever resolves first decides the
//!   navigation.
//! - **Elapsed-time guard**: a fallback timer resurrected long after the
//!   original gesture (backgrounded page, throttled scheduler) is
//!   suppressed instead of bouncing the visitor to the store.
//! - **Store links**: explicit store URLs win; otherwise App Store and
//!   Google Play links are synthesized from the configured identifiers.
//!
//! Neither platform exposes an "is this app installed?" API to web
//! content, so timing is the proxy signal: a probe that never completes
//! within the delay window means the application is absent.
//!
//! # Quick Start
//!
//! ```rust
//! use deeplink_fallback::{AndroidApp, DeeplinkConfig, IosApp, Platform};
//!
//! let config = DeeplinkConfig::builder()
//!     .ios(IosApp::builder().app_name("foo").app_id("123").build())
//!     .android(AndroidApp::builder().app_id("com.example.app").build())
//!     .build();
//!
//! assert_eq!(
//!     config.store_link(Platform::Ios).as_deref(),
//!     Some("itms-apps://itunes.apple.com/app/foo/id123?mt=8"),
//! );
//! assert_eq!(
//!     config.store_link(Platform::Android).as_deref(),
//!     Some("https://play.google.com/store/apps/details?id=com.example.app"),
//! );
//! ```
//!
//! # Session Integration
//!
//! ```rust,ignore
//! use deeplink_fallback::{DeeplinkConfig, DeeplinkSession, IosApp};
//!
//! let session = DeeplinkSession::new(host); // host: Arc<dyn NavigationHost>
//! session.configure(
//!     DeeplinkConfig::builder()
//!         .ios(IosApp::builder().app_name("foo").app_id("123").build())
//!         .build(),
//! );
//! session.open("myapp://action");
//! ```

pub mod config;
pub mod error;
pub mod host;
pub mod platform;
pub mod session;
pub mod time;

// Re-export main types for convenience
pub use config::{
	AndroidApp, AndroidAppBuilder, DeeplinkConfig, DeeplinkConfigBuilder, IosApp, IosAppBuilder,
};
pub use error::{
	DeeplinkError, validate_android_package, validate_ios_app_id, validate_store_url,
};
pub use host::{NavigationHost, ProbeHandle, ProbeSignal};
pub use platform::{Platform, PlatformClassifier, UserAgentClassifier};
pub use session::{DeeplinkSession, LaunchOutcome};
pub use time::{MockTimeProvider, SystemTimeProvider, TimeProvider};

/// Result type for deeplink operations.
pub type DeeplinkResult<T> = Result<T, DeeplinkError>;
