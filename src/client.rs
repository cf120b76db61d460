//! OAuth 1.0a signed HTTP client.
//!
//! [`SignedClient`] owns the credentials, the [`ClientConfig`], and the injected [`JsonCodec`].
//! Every call follows the same pipeline: expand the URL template, resolve it against the API
//! base URL, sign with a fresh nonce, dispatch once through the [`ApiHttpClient`], classify the
//! status, then decode the body into the caller's [`DecodeTarget`].

pub mod template;

mod status;

// self
use crate::{
	_prelude::*,
	auth::Credentials,
	config::ClientConfig,
	decode::{DecodeTarget, JsonCodec},
	error::ConfigError,
	http::{ACCEPT, AUTHORIZATION, ApiHttpClient, ApiRequest, TransportErrorMapper},
	oauth1::{Nonce, OAuth1Signer},
};
#[cfg(feature = "reqwest")]
use crate::http::{ReqwestHttpClient, ReqwestTransportErrorMapper};

/// Signed client backed by the default reqwest transport.
#[cfg(feature = "reqwest")]
pub type ReqwestSignedClient = SignedClient<ReqwestHttpClient, ReqwestTransportErrorMapper>;

/// HTTP client that signs every request with a fixed OAuth 1.0a credential tuple.
///
/// The client holds no mutable state; share it freely across tasks.
pub struct SignedClient<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// HTTP transport used for every request.
	pub http_client: Arc<C>,
	/// Mapper converting transport failures into [`Error`] values.
	pub transport_mapper: Arc<M>,
	signer: OAuth1Signer,
	codec: JsonCodec,
	config: ClientConfig,
}
impl<C, M> SignedClient<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Creates a client that dispatches through a caller-supplied transport and mapper.
	pub fn with_http_client(
		credentials: Credentials,
		config: ClientConfig,
		http_client: impl Into<Arc<C>>,
		transport_mapper: impl Into<Arc<M>>,
	) -> Self {
		Self {
			http_client: http_client.into(),
			transport_mapper: transport_mapper.into(),
			signer: OAuth1Signer::new(credentials),
			codec: JsonCodec::default(),
			config,
		}
	}

	/// Replaces the JSON codec used for request negotiation and response decoding.
	pub fn with_codec(mut self, codec: JsonCodec) -> Self {
		self.codec = codec;

		self
	}

	/// Client configuration.
	pub fn config(&self) -> &ClientConfig {
		&self.config
	}

	/// Injected JSON codec.
	pub fn codec(&self) -> &JsonCodec {
		&self.codec
	}

	/// Credentials used for signing.
	pub fn credentials(&self) -> &Credentials {
		self.signer.credentials()
	}

	/// Expands `template` with `params` and resolves it against the API base URL.
	///
	/// Templates that already expand to an absolute URL are used as-is.
	pub fn resolve(&self, template: &str, params: &[&str]) -> Result<Url> {
		let expanded = template::expand(template, params)?;

		match Url::parse(&expanded) {
			Ok(url) => Ok(url),
			Err(url::ParseError::RelativeUrlWithoutBase) =>
				self.config.api_base_url.join(&expanded).map_err(|source| {
					ConfigError::InvalidEndpoint { endpoint: expanded.clone(), source }.into()
				}),
			Err(source) => Err(ConfigError::InvalidEndpoint { endpoint: expanded, source }.into()),
		}
	}

	/// Signed GET against a URL template, decoded into `T`.
	pub async fn get<T>(&self, template: &str, params: &[&str]) -> Result<T>
	where
		T: DecodeTarget,
	{
		let url = self.resolve(template, params)?;

		self.get_url(url).await
	}

	/// Signed GET against an already-built URL, decoded into `T`.
	pub async fn get_url<T>(&self, url: Url) -> Result<T>
	where
		T: DecodeTarget,
	{
		let request = self.sign(url)?;
		let url = request.url.clone();
		let response = self
			.http_client
			.execute(request)
			.await
			.map_err(|e| self.transport_mapper.map_transport_error(&url, e))?;

		if !response.is_success() {
			return Err(status::classify_failure(&self.codec, &response));
		}

		Ok(T::decode(&self.codec, &response.body)?)
	}

	/// Builds a signed GET request for `url` using fresh freshness values.
	pub fn sign(&self, url: Url) -> Result<ApiRequest> {
		self.sign_with_nonce(url, &Nonce::fresh())
	}

	/// Builds a signed GET request for `url` using caller-supplied freshness values.
	pub fn sign_with_nonce(&self, url: Url, nonce: &Nonce) -> Result<ApiRequest> {
		let authorization = self.signer.authorization_header("GET", &url, nonce)?;
		let mut request = ApiRequest::get(url)
			.with_header(ACCEPT, self.codec.accept())
			.with_header(AUTHORIZATION, authorization);

		for (name, value) in self.codec.request_headers() {
			request = request.with_header(name, value.clone());
		}

		Ok(request)
	}
}
#[cfg(feature = "reqwest")]
impl SignedClient<ReqwestHttpClient, ReqwestTransportErrorMapper> {
	/// Creates a reqwest-backed client pointed at the default LinkedIn API base URL.
	pub fn new(credentials: Credentials) -> Result<Self> {
		Self::with_config(credentials, ClientConfig::default())
	}

	/// Creates a reqwest-backed client whose transport honors `config`.
	pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
		let http_client = ReqwestHttpClient::from_config(&config)?;

		Ok(Self::with_http_client(credentials, config, http_client, ReqwestTransportErrorMapper))
	}
}
impl<C, M> Clone for SignedClient<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	fn clone(&self) -> Self {
		Self {
			http_client: self.http_client.clone(),
			transport_mapper: self.transport_mapper.clone(),
			signer: self.signer.clone(),
			codec: self.codec.clone(),
			config: self.config.clone(),
		}
	}
}
impl<C, M> Debug for SignedClient<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("SignedClient")
			.field("signer", &self.signer)
			.field("codec", &self.codec)
			.field("config", &self.config)
			.finish_non_exhaustive()
	}
}
