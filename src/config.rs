//! Client configuration: API base URL, transport timeout, and user agent.

// std
use std::{env, time::Duration as StdDuration};
// self
use crate::{_prelude::*, error::ConfigError};

/// The LinkedIn REST API prefix all relative endpoint templates resolve against.
pub const DEFAULT_API_BASE_URL: &str = "https://api.linkedin.com/v1/";
/// Environment variable overriding [`ClientConfig::api_base_url`].
pub const ENV_API_BASE_URL: &str = "LINKEDIN_API_BASE_URL";

/// Settings shared by every request a [`SignedClient`](crate::client::SignedClient) issues.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
	/// Base URL relative endpoint templates are joined onto. Always ends with `/`.
	pub api_base_url: Url,
	/// Per-request timeout applied by the default transport; `None` waits indefinitely.
	pub timeout: Option<StdDuration>,
	/// `User-Agent` sent by the default transport.
	pub user_agent: String,
}
impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			api_base_url: Url::parse(DEFAULT_API_BASE_URL)
				.expect("Default API base URL is a valid absolute URL."),
			timeout: None,
			user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).into(),
		}
	}
}
impl ClientConfig {
	/// Defaults overridden by `LINKEDIN_API_BASE_URL` when it is set.
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|name| env::var(name).ok())
	}

	/// Same as [`Self::from_env`] but resolves variables through `lookup`.
	pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
	where
		F: Fn(&'static str) -> Option<String>,
	{
		match lookup(ENV_API_BASE_URL) {
			Some(url) => Self::default().with_api_base_url(&url),
			None => Ok(Self::default()),
		}
	}

	/// Replaces the API base URL, appending a trailing `/` so relative templates nest under it.
	pub fn with_api_base_url(mut self, url: &str) -> Result<Self, ConfigError> {
		self.api_base_url = normalize_base_url(url)?;

		Ok(self)
	}

	/// Sets the per-request timeout used by the default transport.
	pub fn with_timeout(mut self, timeout: StdDuration) -> Self {
		self.timeout = Some(timeout);

		self
	}

	/// Overrides the `User-Agent` header used by the default transport.
	pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
		self.user_agent = user_agent.into();

		self
	}
}

fn normalize_base_url(raw: &str) -> Result<Url, ConfigError> {
	let mut url = Url::parse(raw)
		.map_err(|source| ConfigError::InvalidBaseUrl { url: raw.into(), source: Some(source) })?;

	if url.cannot_be_a_base() {
		return Err(ConfigError::InvalidBaseUrl { url: raw.into(), source: None });
	}
	if !url.path().ends_with('/') {
		let path = format!("{}/", url.path());

		url.set_path(&path);
	}

	url.set_query(None);
	url.set_fragment(None);

	Ok(url)
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn default_points_at_linkedin_v1() {
		let config = ClientConfig::default();

		assert_eq!(config.api_base_url.as_str(), DEFAULT_API_BASE_URL);
		assert!(config.timeout.is_none());
		assert!(config.user_agent.starts_with("linkedin-oauth1/"));
	}

	#[test]
	fn base_url_gains_trailing_slash() {
		let config = ClientConfig::default()
			.with_api_base_url("http://127.0.0.1:8080/v1")
			.expect("Base URL should parse.");

		assert_eq!(config.api_base_url.as_str(), "http://127.0.0.1:8080/v1/");
		assert_eq!(
			config.api_base_url.join("people/~").expect("Join should succeed.").as_str(),
			"http://127.0.0.1:8080/v1/people/~"
		);
	}

	#[test]
	fn invalid_base_urls_are_rejected() {
		assert!(matches!(
			ClientConfig::default().with_api_base_url("not a url"),
			Err(ConfigError::InvalidBaseUrl { source: Some(_), .. })
		));
		assert!(matches!(
			ClientConfig::default().with_api_base_url("mailto:someone@example.com"),
			Err(ConfigError::InvalidBaseUrl { source: None, .. })
		));
	}

	#[test]
	fn lookup_overrides_base_url() {
		let config = ClientConfig::from_lookup(|name| {
			(name == ENV_API_BASE_URL).then(|| "https://staging.example.com/api".to_owned())
		})
		.expect("Override should parse.");

		assert_eq!(config.api_base_url.as_str(), "https://staging.example.com/api/");
		assert_eq!(
			ClientConfig::from_lookup(|_| None).expect("Defaults always parse."),
			ClientConfig::default()
		);
	}
}
