//! Transport primitives for signed API calls.
//!
//! The module exposes [`ApiHttpClient`] alongside the crate-owned [`ApiRequest`] and
//! [`ApiResponse`] types so downstream crates can plug in custom HTTP stacks (or fakes in
//! tests) without the signing and decoding layers depending on any particular client.
//! [`TransportErrorMapper`] converts transport-specific failures into the crate taxonomy.

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// self
use crate::{_prelude::*, error::TransportError};
#[cfg(feature = "reqwest")] use crate::{config::ClientConfig, error::ConfigError};

/// Boxed future returned by [`ApiHttpClient::execute`].
pub type HttpFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + 'a + Send>>;

/// Header carrying the OAuth 1.0a signature.
pub const AUTHORIZATION: &str = "authorization";
/// Header advertising the accepted response media type.
pub const ACCEPT: &str = "accept";

/// Fully signed GET request handed to a transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
	/// Absolute request URL including the query string.
	pub url: Url,
	/// Lower-case header names mapped to their values.
	pub headers: BTreeMap<String, String>,
}
impl ApiRequest {
	/// Creates a request for `url` without headers.
	pub fn get(url: Url) -> Self {
		Self { url, headers: BTreeMap::new() }
	}

	/// Adds or replaces a header; the name is lower-cased.
	pub fn with_header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
		self.headers.insert(name.as_ref().to_ascii_lowercase(), value.into());

		self
	}

	/// Looks up a header by case-insensitive name.
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
	}
}

/// Raw response captured by a transport.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiResponse {
	/// HTTP status code.
	pub status: u16,
	/// `Content-Type` header, when present.
	pub content_type: Option<String>,
	/// Response body bytes.
	pub body: Vec<u8>,
}
impl ApiResponse {
	/// Returns `true` for 2xx statuses.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// Abstraction over HTTP transports capable of executing signed GET requests.
///
/// Implementations perform exactly one attempt per call; retries, if ever wanted, belong to
/// the caller. Transports report only network-level failures as errors: every HTTP status,
/// including 4xx and 5xx, must come back as an [`ApiResponse`] so the client can classify it.
pub trait ApiHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Dispatches `request` and captures the response.
	fn execute(&self, request: ApiRequest) -> HttpFuture<'_, ApiResponse, Self::TransportError>;
}

/// Maps transport failures into crate [`Error`] values.
pub trait TransportErrorMapper<E>
where
	Self: 'static + Send + Sync,
	E: 'static + Send + Sync + StdError,
{
	/// Converts an error emitted by the transport while calling `url`.
	fn map_transport_error(&self, url: &Url, error: E) -> Error;
}

/// Mapper that treats every transport failure as a network error.
///
/// Suitable for custom transports whose errors carry no finer classification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NetworkErrorMapper;
impl<E> TransportErrorMapper<E> for NetworkErrorMapper
where
	E: 'static + Send + Sync + StdError,
{
	fn map_transport_error(&self, _url: &Url, error: E) -> Error {
		TransportError::network(error).into()
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Builds a reqwest client honoring the timeout and user agent in `config`.
	pub fn from_config(config: &ClientConfig) -> Result<Self, ConfigError> {
		let mut builder = ReqwestClient::builder().user_agent(config.user_agent.clone());

		if let Some(timeout) = config.timeout {
			builder = builder.timeout(timeout);
		}

		Ok(Self(builder.build()?))
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl ApiHttpClient for ReqwestHttpClient {
	type TransportError = ReqwestError;

	fn execute(&self, request: ApiRequest) -> HttpFuture<'_, ApiResponse, Self::TransportError> {
		Box::pin(async move {
			let mut builder = self.0.get(request.url);

			for (name, value) in &request.headers {
				builder = builder.header(name.as_str(), value.as_str());
			}

			let response = builder.send().await?;
			let status = response.status().as_u16();
			let content_type = response
				.headers()
				.get(reqwest::header::CONTENT_TYPE)
				.and_then(|value| value.to_str().ok())
				.map(str::to_owned);
			let body = response.bytes().await?.to_vec();

			Ok(ApiResponse { status, content_type, body })
		})
	}
}

/// Default mapper for reqwest-backed transports.
#[cfg(feature = "reqwest")]
#[derive(Clone, Copy, Debug, Default)]
pub struct ReqwestTransportErrorMapper;
#[cfg(feature = "reqwest")]
impl TransportErrorMapper<ReqwestError> for ReqwestTransportErrorMapper {
	fn map_transport_error(&self, _url: &Url, err: ReqwestError) -> Error {
		if err.is_builder() {
			return ConfigError::from(err).into();
		}

		TransportError::from(err).into()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn request_headers_are_case_insensitive() {
		let request = ApiRequest::get(Url::parse("https://example.com/").expect("URL"))
			.with_header("Accept", "application/json");

		assert_eq!(request.header("ACCEPT"), Some("application/json"));
		assert_eq!(request.headers.keys().collect::<Vec<_>>(), ["accept"]);
	}

	#[test]
	fn success_covers_2xx_only() {
		let ok = ApiResponse { status: 204, ..Default::default() };
		let redirect = ApiResponse { status: 302, ..Default::default() };

		assert!(ok.is_success());
		assert!(!redirect.is_success());
	}

	#[test]
	fn network_mapper_wraps_any_error() {
		let url = Url::parse("https://example.com/").expect("URL");
		let err = NetworkErrorMapper
			.map_transport_error(&url, std::io::Error::other("connection reset"));

		assert!(matches!(err, Error::Transport(TransportError::Network { .. })));
	}
}
