//! Name-keyed registry dispatching capability calls to provider adapters.

// self
use crate::{
	_prelude::*,
	auth::ProviderId,
	connect::{ConnectionIdentity, ConnectionStatus, ProviderAdapter, StatusDelivery, UserProfile},
	error::ConfigError,
};

/// Shared handle to a registered adapter.
pub type SharedAdapter = Arc<dyn ProviderAdapter>;

/// Thread-safe map from provider id to adapter.
///
/// Lookups clone the adapter handle and release the lock before any call is awaited.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
	adapters: Arc<RwLock<BTreeMap<ProviderId, SharedAdapter>>>,
}
impl ProviderRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers `adapter` under its own provider id, returning the adapter it replaced.
	pub fn register<A>(&self, adapter: A) -> Option<SharedAdapter>
	where
		A: ProviderAdapter,
	{
		self.register_shared(Arc::new(adapter))
	}

	/// Registers an already shared adapter, returning the adapter it replaced.
	pub fn register_shared(&self, adapter: SharedAdapter) -> Option<SharedAdapter> {
		let id = adapter.provider_id().clone();

		self.adapters.write().insert(id, adapter)
	}

	/// Removes the adapter registered under `provider`.
	pub fn unregister(&self, provider: &str) -> Option<SharedAdapter> {
		self.adapters.write().remove(provider)
	}

	/// Adapter registered under `provider`, if any.
	pub fn get(&self, provider: &str) -> Option<SharedAdapter> {
		self.adapters.read().get(provider).cloned()
	}

	/// Registered provider ids in ascending order.
	pub fn providers(&self) -> Vec<ProviderId> {
		self.adapters.read().keys().cloned().collect()
	}

	/// Adapter registered under `provider`, or [`ConfigError::UnknownProvider`].
	pub fn require(&self, provider: &str) -> Result<SharedAdapter> {
		self.get(provider)
			.ok_or_else(|| ConfigError::UnknownProvider { provider: provider.into() }.into())
	}

	/// Probes the connection of `provider`.
	pub async fn probe_connection(&self, provider: &str) -> Result<ConnectionStatus> {
		let adapter = self.require(provider)?;

		Ok(adapter.probe_connection().await)
	}

	/// Boolean connection test for `provider`.
	pub async fn test_connection(&self, provider: &str) -> Result<bool> {
		let adapter = self.require(provider)?;

		Ok(adapter.test_connection().await)
	}

	/// Connection identity from `provider`.
	pub async fn fetch_connection_identity(&self, provider: &str) -> Result<ConnectionIdentity> {
		self.require(provider)?.fetch_connection_identity().await
	}

	/// User profile from `provider`.
	pub async fn fetch_user_profile(&self, provider: &str) -> Result<UserProfile> {
		self.require(provider)?.fetch_user_profile().await
	}

	/// Posts `message` through `provider`.
	pub async fn post_status(&self, provider: &str, message: &str) -> Result<StatusDelivery> {
		self.require(provider)?.post_status(message).await
	}
}
impl Debug for ProviderRegistry {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ProviderRegistry").field("providers", &self.providers()).finish()
	}
}
