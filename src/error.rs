//! Error types for deeplink configuration.

use thiserror::Error;

/// Errors that advisory configuration validation can report.
///
/// The launch protocol itself never surfaces these: a configuration that
/// cannot produce a store link simply makes the fallback navigate
/// nowhere. They exist for callers that want to catch malformed
/// identifiers before shipping them.
#[derive(Debug, Error)]
pub enum DeeplinkError {
	/// Invalid iOS app ID format.
	///
	/// App Store identifiers are numeric (e.g. `284882215`).
	#[error("invalid iOS app ID: {0}. Expected a numeric App Store identifier")]
	InvalidIosAppId(String),

	/// Invalid Android package name format.
	///
	/// Package names follow reverse domain notation (e.g.
	/// `com.example.app`).
	#[error("invalid Android package name: {0}. Expected reverse domain notation")]
	InvalidAndroidPackage(String),

	/// Invalid store URL override.
	#[error("invalid store URL: {0}. Expected an absolute URL with a scheme")]
	InvalidStoreUrl(String),
}

/// Validates an iOS App Store identifier.
///
/// # Errors
///
/// Returns `DeeplinkError::InvalidIosAppId` if the identifier is empty or
/// contains anything but ASCII digits.
pub fn validate_ios_app_id(app_id: &str) -> Result<(), DeeplinkError> {
	if app_id.is_empty() || !app_id.chars().all(|c| c.is_ascii_digit()) {
		return Err(DeeplinkError::InvalidIosAppId(app_id.to_string()));
	}

	Ok(())
}

/// Validates an Android package name.
///
/// Valid format: two or more dot-separated segments, each starting with a
/// letter and containing only ASCII alphanumerics and underscores.
///
/// # Errors
///
/// Returns `DeeplinkError::InvalidAndroidPackage` if the format is
/// invalid.
pub fn validate_android_package(package: &str) -> Result<(), DeeplinkError> {
	let parts: Vec<&str> = package.split('.').collect();

	if parts.len() < 2 {
		return Err(DeeplinkError::InvalidAndroidPackage(package.to_string()));
	}

	for part in parts {
		let starts_with_letter = part.chars().next().is_some_and(|c| c.is_ascii_alphabetic());
		if !starts_with_letter
			|| !part
				.chars()
				.all(|c| c.is_ascii_alphanumeric() || c == '_')
		{
			return Err(DeeplinkError::InvalidAndroidPackage(package.to_string()));
		}
	}

	Ok(())
}

/// Validates a store URL override.
///
/// Only the shape is checked: a non-empty scheme followed by `://` and a
/// non-empty remainder. Custom store schemes such as `itms-apps` are
/// expected here.
///
/// # Errors
///
/// Returns `DeeplinkError::InvalidStoreUrl` if the URL is not absolute.
pub fn validate_store_url(url: &str) -> Result<(), DeeplinkError> {
	let absolute = url.split_once("://").is_some_and(|(scheme, rest)| {
		!scheme.is_empty()
			&& scheme
				.chars()
				.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
			&& !rest.is_empty()
	});

	if !absolute {
		return Err(DeeplinkError::InvalidStoreUrl(url.to_string()));
	}

	Ok(())
}
