//! LinkedIn implementation of [`ProviderAdapter`].

// self
use crate::{
	_prelude::*,
	auth::ProviderId,
	connect::{
		AdapterFuture, ConnectionIdentity, ConnectionStatus, ProviderAdapter, StatusDelivery,
		UserProfile,
	},
	http::{ApiHttpClient, TransportErrorMapper},
	linkedin::{LinkedIn, Profile},
	obs::{self, ApiCall, CallSpan},
};

/// Registry key LinkedIn adapters register under.
pub const LINKEDIN_PROVIDER: &str = "linkedin";

impl From<&Profile> for ConnectionIdentity {
	fn from(profile: &Profile) -> Self {
		Self {
			external_id: profile.id.clone(),
			display_name: profile.full_name(),
			profile_url: profile.public_profile_url.clone(),
			image_url: profile.picture_url.clone(),
		}
	}
}
impl From<&Profile> for UserProfile {
	fn from(profile: &Profile) -> Self {
		Self {
			full_name: profile.full_name(),
			first_name: profile.first_name.clone(),
			last_name: profile.last_name.clone(),
			email: None,
			username: None,
		}
	}
}

/// Adapts a [`LinkedIn`] binding to the provider-neutral capability surface.
pub struct LinkedInAdapter<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	id: ProviderId,
	api: LinkedIn<C, M>,
}
impl<C, M> LinkedInAdapter<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Wraps `api` under the `linkedin` provider id.
	pub fn new(api: LinkedIn<C, M>) -> Self {
		Self { id: ProviderId::from_static(LINKEDIN_PROVIDER), api }
	}

	/// Wraps `api` under a custom provider id (e.g. one per tenant application).
	pub fn with_provider_id(api: LinkedIn<C, M>, id: ProviderId) -> Self {
		Self { id, api }
	}

	/// Underlying LinkedIn binding.
	pub fn api(&self) -> &LinkedIn<C, M> {
		&self.api
	}
}
impl<C, M> ProviderAdapter for LinkedInAdapter<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	fn provider_id(&self) -> &ProviderId {
		&self.id
	}

	fn probe_connection(&self) -> AdapterFuture<'_, ConnectionStatus> {
		let span = CallSpan::new(ApiCall::ConnectionProbe, "connect.probe_connection");

		Box::pin(span.instrument(async move {
			match self.api.user_profile().await {
				Ok(_) => ConnectionStatus::Connected,
				Err(e) => {
					obs::warn_probe_failed(&self.id, &e);

					ConnectionStatus::from_error(&e)
				},
			}
		}))
	}

	fn fetch_connection_identity(&self) -> AdapterFuture<'_, Result<ConnectionIdentity>> {
		Box::pin(async move { Ok(ConnectionIdentity::from(&self.api.user_profile().await?)) })
	}

	fn fetch_user_profile(&self) -> AdapterFuture<'_, Result<UserProfile>> {
		Box::pin(async move { Ok(UserProfile::from(&self.api.user_profile().await?)) })
	}

	fn post_status<'a>(&'a self, _message: &'a str) -> AdapterFuture<'a, Result<StatusDelivery>> {
		Box::pin(async move { Ok(StatusDelivery::Unsupported) })
	}
}
impl<C, M> Debug for LinkedInAdapter<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("LinkedInAdapter").field("id", &self.id).field("api", &self.api).finish()
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	#[cfg(feature = "reqwest")] use httpmock::prelude::*;
	// self
	use super::*;
	#[cfg(feature = "reqwest")] use crate::_preludet::*;

	#[cfg(feature = "reqwest")]
	const PROFILE_PATH: &str = "/v1/people/~:(id,first-name,last-name,headline,industry,site-standard-profile-request,public-profile-url,picture-url,summary)";

	fn jane() -> Profile {
		Profile {
			id: "123".into(),
			first_name: "Jane".into(),
			last_name: "Doe".into(),
			public_profile_url: Some("http://www.linkedin.com/in/janedoe".into()),
			picture_url: Some("http://media.linkedin.com/jane.png".into()),
			..Default::default()
		}
	}

	#[test]
	fn identity_joins_names_and_copies_links() {
		assert_eq!(ConnectionIdentity::from(&jane()), ConnectionIdentity {
			external_id: "123".into(),
			display_name: "Jane Doe".into(),
			profile_url: Some("http://www.linkedin.com/in/janedoe".into()),
			image_url: Some("http://media.linkedin.com/jane.png".into()),
		});
	}

	#[test]
	fn user_profile_never_carries_email_or_username() {
		assert_eq!(UserProfile::from(&jane()), UserProfile {
			full_name: "Jane Doe".into(),
			first_name: "Jane".into(),
			last_name: "Doe".into(),
			email: None,
			username: None,
		});
	}

	#[cfg(feature = "reqwest")]
	#[tokio::test]
	async fn test_connection_follows_the_profile_fetch() {
		let server = MockServer::start_async().await;
		let mut ok = server
			.mock_async(|when, then| {
				when.method(GET).path(PROFILE_PATH).header_exists("authorization");
				then.status(200)
					.header("content-type", "application/json")
					.body(r#"{"id":"123","firstName":"Jane","lastName":"Doe"}"#);
			})
			.await;
		let adapter = LinkedInAdapter::new(build_reqwest_test_linkedin(&server.url("/v1/")));

		assert!(adapter.test_connection().await);
		assert_eq!(
			adapter.fetch_connection_identity().await.expect("Profile should load.").display_name,
			"Jane Doe"
		);

		ok.assert_calls_async(2).await;
		ok.delete_async().await;

		let rejected = server
			.mock_async(|when, then| {
				when.method(GET).path(PROFILE_PATH);
				then.status(401).body("oauth_problem=token_rejected");
			})
			.await;

		assert!(!adapter.test_connection().await);
		assert!(matches!(adapter.probe_connection().await, ConnectionStatus::Rejected { .. }));

		rejected.assert_calls_async(2).await;
	}
}
