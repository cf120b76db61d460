//! Endpoint templates for the LinkedIn v1 REST API.

/// Profile of the authenticated member with the fields [`Profile`](super::Profile) reads.
pub const PROFILE_TEMPLATE: &str = "people/~:(id,first-name,last-name,headline,industry,site-standard-profile-request,public-profile-url,picture-url,summary)?format=json";
/// Network updates feed; placeholders bind `count` first, then `start`.
pub const NETWORK_UPDATES_TEMPLATE: &str =
	"people/~/network/updates?format=json&count={count}&start={start}";
/// First-degree connections.
pub const CONNECTIONS_TEMPLATE: &str = "people/~/connections?format=json";

/// URL templates used by [`LinkedIn`](super::LinkedIn), relative to the API base URL unless
/// absolute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkedInEndpoints {
	/// Profile template; takes no parameters.
	pub profile: String,
	/// Network updates template; takes `count` then `start`.
	pub network_updates: String,
	/// Connections template; takes no parameters.
	pub connections: String,
}
impl Default for LinkedInEndpoints {
	fn default() -> Self {
		Self {
			profile: PROFILE_TEMPLATE.into(),
			network_updates: NETWORK_UPDATES_TEMPLATE.into(),
			connections: CONNECTIONS_TEMPLATE.into(),
		}
	}
}
impl LinkedInEndpoints {
	/// Overrides the profile template.
	pub fn with_profile(mut self, template: impl Into<String>) -> Self {
		self.profile = template.into();

		self
	}

	/// Overrides the network updates template.
	pub fn with_network_updates(mut self, template: impl Into<String>) -> Self {
		self.network_updates = template.into();

		self
	}

	/// Overrides the connections template.
	pub fn with_connections(mut self, template: impl Into<String>) -> Self {
		self.connections = template.into();

		self
	}
}
