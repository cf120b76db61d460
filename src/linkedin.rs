//! Typed bindings for the LinkedIn v1 REST API.
//!
//! [`LinkedIn`] maps each fixed endpoint onto one signed GET through [`SignedClient`]. Typed
//! calls decode through the client's [`JsonCodec`]; the `*_json` variants return the raw body.

pub mod endpoints;
pub mod model;

pub use endpoints::*;
pub use model::*;

// crates.io
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	client::SignedClient,
	decode::{DecodeTarget, Json},
	http::{ApiHttpClient, TransportErrorMapper},
	obs::{self, ApiCall},
};
#[cfg(feature = "reqwest")]
use crate::{
	auth::Credentials,
	config::ClientConfig,
	http::{ReqwestHttpClient, ReqwestTransportErrorMapper},
};

/// Header LinkedIn reads to select the response format.
pub const FORMAT_HEADER: &str = "x-li-format";

/// LinkedIn binding backed by the default reqwest transport.
#[cfg(feature = "reqwest")]
pub type ReqwestLinkedIn = LinkedIn<ReqwestHttpClient, ReqwestTransportErrorMapper>;

/// LinkedIn API operations for the member whose access token signs the requests.
pub struct LinkedIn<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	client: SignedClient<C, M>,
	endpoints: LinkedInEndpoints,
}
impl<C, M> LinkedIn<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Wraps `client`, adding `x-li-format: json` to its codec's negotiation headers.
	pub fn from_client(client: SignedClient<C, M>) -> Self {
		let codec = client.codec().clone().with_request_header(FORMAT_HEADER, "json");

		Self { client: client.with_codec(codec), endpoints: LinkedInEndpoints::default() }
	}

	/// Replaces the endpoint templates.
	pub fn with_endpoints(mut self, endpoints: LinkedInEndpoints) -> Self {
		self.endpoints = endpoints;

		self
	}

	/// Underlying signed client, for calls this binding does not cover.
	pub fn client(&self) -> &SignedClient<C, M> {
		&self.client
	}

	/// Endpoint templates in use.
	pub fn endpoints(&self) -> &LinkedInEndpoints {
		&self.endpoints
	}

	/// Profile of the authenticated member.
	pub async fn user_profile(&self) -> Result<Profile> {
		obs::observe(ApiCall::UserProfile, "linkedin.user_profile", async {
			self.client.get::<Json<Profile>>(&self.endpoints.profile, &[]).await.map(Json::into_inner)
		})
		.await
	}

	/// LinkedIn member identifier of the authenticated member.
	pub async fn profile_id(&self) -> Result<String> {
		Ok(self.user_profile().await?.id)
	}

	/// Public profile URL of the authenticated member, when LinkedIn returns one.
	pub async fn profile_url(&self) -> Result<Option<String>> {
		Ok(self.user_profile().await?.public_profile_url)
	}

	/// First-degree connections of the authenticated member, in server order.
	pub async fn connections(&self) -> Result<Vec<Profile>> {
		obs::observe(ApiCall::Connections, "linkedin.connections", async {
			let Json(connections) =
				self.client.get::<Json<Connections>>(&self.endpoints.connections, &[]).await?;

			Ok(connections.values)
		})
		.await
	}

	/// First page (`start=0`, `count=100`) of the network updates feed.
	pub async fn network_updates(&self) -> Result<NetworkUpdates> {
		self.network_updates_page(Page::default()).await
	}

	/// Network updates feed at `page`.
	pub async fn network_updates_page(&self, page: Page) -> Result<NetworkUpdates> {
		self.network_updates_as::<NetworkUpdates>(page).await
	}

	/// Network updates feed at `page`, decoded into a caller-chosen shape.
	pub async fn network_updates_as<T>(&self, page: Page) -> Result<T>
	where
		T: DeserializeOwned,
	{
		obs::observe(ApiCall::NetworkUpdates, "linkedin.network_updates", async {
			self.fetch_network_updates::<Json<T>>(page).await.map(Json::into_inner)
		})
		.await
	}

	/// Raw JSON text of the first network updates page.
	pub async fn network_updates_json(&self) -> Result<String> {
		self.network_updates_json_page(Page::default()).await
	}

	/// Raw JSON text of the network updates feed at `page`.
	pub async fn network_updates_json_page(&self, page: Page) -> Result<String> {
		obs::observe(
			ApiCall::RawJson,
			"linkedin.network_updates_json",
			self.fetch_network_updates::<String>(page),
		)
		.await
	}

	/// Raw JSON text from any signed LinkedIn URL.
	pub async fn json(&self, url: Url) -> Result<String> {
		obs::observe(ApiCall::RawJson, "linkedin.json", self.client.get_url::<String>(url)).await
	}

	async fn fetch_network_updates<T>(&self, page: Page) -> Result<T>
	where
		T: DecodeTarget,
	{
		let count = page.count.to_string();
		let start = page.start.to_string();

		self.client.get(&self.endpoints.network_updates, &[count.as_str(), start.as_str()]).await
	}
}
#[cfg(feature = "reqwest")]
impl LinkedIn<ReqwestHttpClient, ReqwestTransportErrorMapper> {
	/// Creates a reqwest-backed binding against the public LinkedIn API.
	pub fn new(credentials: Credentials) -> Result<Self> {
		Self::with_config(credentials, ClientConfig::default())
	}

	/// Creates a reqwest-backed binding honoring `config`.
	pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
		Ok(Self::from_client(SignedClient::with_config(credentials, config)?))
	}
}
impl<C, M> Clone for LinkedIn<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	fn clone(&self) -> Self {
		Self { client: self.client.clone(), endpoints: self.endpoints.clone() }
	}
}
impl<C, M> Debug for LinkedIn<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("LinkedIn")
			.field("client", &self.client)
			.field("endpoints", &self.endpoints)
			.finish()
	}
}
