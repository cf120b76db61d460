//! Capability trait and the provider-neutral values it produces.

// self
use crate::{_prelude::*, auth::ProviderId};

/// Boxed future returned by [`ProviderAdapter`] operations.
pub type AdapterFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a + Send>>;

/// Provider-neutral identity of a connected account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionIdentity {
	/// Provider-scoped user identifier.
	pub external_id: String,
	/// Human-readable name.
	pub display_name: String,
	/// Public profile page, when the provider exposes one.
	pub profile_url: Option<String>,
	/// Avatar image, when the provider exposes one.
	pub image_url: Option<String>,
}

/// Provider-neutral user profile used to pre-fill local accounts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
	/// Given and family name joined by a single space.
	pub full_name: String,
	/// Given name.
	pub first_name: String,
	/// Family name.
	pub last_name: String,
	/// E-mail address, when the provider shares one.
	pub email: Option<String>,
	/// Provider username, when the provider has such a concept.
	pub username: Option<String>,
}

/// Result of probing whether stored credentials still work.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConnectionStatus {
	/// The provider answered an authenticated call.
	Connected,
	/// The provider refused the credentials or the request (4xx class).
	Rejected {
		/// Human-readable failure description.
		reason: String,
	},
	/// The provider could not be reached or answered unusably (network, 5xx, bad body).
	Unavailable {
		/// Human-readable failure description.
		reason: String,
	},
}
impl ConnectionStatus {
	/// Classifies a failed probe call.
	pub fn from_error(error: &Error) -> Self {
		let reason = error.to_string();

		if error.is_client_error() { Self::Rejected { reason } } else { Self::Unavailable { reason } }
	}

	/// Returns `true` for [`ConnectionStatus::Connected`].
	pub fn is_connected(&self) -> bool {
		matches!(self, Self::Connected)
	}
}

/// Outcome of [`ProviderAdapter::post_status`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusDelivery {
	/// The status was published.
	Delivered,
	/// The provider does not support status updates; nothing was sent.
	Unsupported,
}

/// Capability surface a social-identity provider exposes to the federation layer.
pub trait ProviderAdapter
where
	Self: 'static + Send + Sync,
{
	/// Registry key of this provider.
	fn provider_id(&self) -> &ProviderId;

	/// Issues one authenticated call and reports whether the credentials still work.
	fn probe_connection(&self) -> AdapterFuture<'_, ConnectionStatus>;

	/// Boolean view of [`Self::probe_connection`]; never fails.
	fn test_connection(&self) -> AdapterFuture<'_, bool> {
		Box::pin(async move { self.probe_connection().await.is_connected() })
	}

	/// Identity of the connected account.
	fn fetch_connection_identity(&self) -> AdapterFuture<'_, Result<ConnectionIdentity>>;

	/// Profile of the connected account.
	fn fetch_user_profile(&self) -> AdapterFuture<'_, Result<UserProfile>>;

	/// Publishes `message` as the account's status, if the provider supports it.
	fn post_status<'a>(&'a self, message: &'a str) -> AdapterFuture<'a, Result<StatusDelivery>>;
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::error::{ApiError, AuthError, TransportError};

	#[test]
	fn probe_failures_split_by_client_error_class() {
		let expired: Error =
			AuthError::Rejected { status: 401, message: "expired".into(), request_id: None }
				.into();
		let throttled: Error =
			ApiError { status: 429, message: "throttled".into(), request_id: None }.into();
		let down: Error = ApiError { status: 502, message: "down".into(), request_id: None }.into();
		let offline: Error =
			TransportError::network(std::io::Error::other("connection refused")).into();

		assert!(matches!(ConnectionStatus::from_error(&expired), ConnectionStatus::Rejected { .. }));
		assert!(matches!(
			ConnectionStatus::from_error(&throttled),
			ConnectionStatus::Rejected { .. }
		));
		assert!(matches!(ConnectionStatus::from_error(&down), ConnectionStatus::Unavailable { .. }));
		assert!(matches!(
			ConnectionStatus::from_error(&offline),
			ConnectionStatus::Unavailable { .. }
		));
		assert!(ConnectionStatus::Connected.is_connected());
	}
}
