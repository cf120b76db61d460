//! Long-lived OAuth 1.0a credentials.

// std
use std::env;
// self
use crate::{_prelude::*, auth::Secret, error::ConfigError};

/// Environment variable holding the application's consumer key.
pub const ENV_CONSUMER_KEY: &str = "LINKEDIN_CONSUMER_KEY";
/// Environment variable holding the application's consumer secret.
pub const ENV_CONSUMER_SECRET: &str = "LINKEDIN_CONSUMER_SECRET";
/// Environment variable holding the member's access token.
pub const ENV_ACCESS_TOKEN: &str = "LINKEDIN_ACCESS_TOKEN";
/// Environment variable holding the member's access token secret.
pub const ENV_ACCESS_TOKEN_SECRET: &str = "LINKEDIN_ACCESS_TOKEN_SECRET";

/// Consumer key/secret plus access token/secret used to sign every request.
///
/// Values are fixed at construction; there are no setters.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
	consumer_key: String,
	consumer_secret: Secret,
	access_token: String,
	access_token_secret: Secret,
}
impl Credentials {
	/// Creates credentials from the application key pair and the member's token pair.
	pub fn new(
		consumer_key: impl Into<String>,
		consumer_secret: impl Into<String>,
		access_token: impl Into<String>,
		access_token_secret: impl Into<String>,
	) -> Self {
		Self {
			consumer_key: consumer_key.into(),
			consumer_secret: Secret::new(consumer_secret),
			access_token: access_token.into(),
			access_token_secret: Secret::new(access_token_secret),
		}
	}

	/// Reads the four values from `LINKEDIN_CONSUMER_KEY`, `LINKEDIN_CONSUMER_SECRET`,
	/// `LINKEDIN_ACCESS_TOKEN`, and `LINKEDIN_ACCESS_TOKEN_SECRET`.
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|name| env::var(name).ok())
	}

	/// Same as [`Self::from_env`] but resolves each variable through `lookup`.
	pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
	where
		F: Fn(&'static str) -> Option<String>,
	{
		let require =
			|name: &'static str| lookup(name).ok_or(ConfigError::MissingCredential { name });

		Ok(Self::new(
			require(ENV_CONSUMER_KEY)?,
			require(ENV_CONSUMER_SECRET)?,
			require(ENV_ACCESS_TOKEN)?,
			require(ENV_ACCESS_TOKEN_SECRET)?,
		))
	}

	/// Application consumer key.
	pub fn consumer_key(&self) -> &str {
		&self.consumer_key
	}

	/// Application consumer secret.
	pub fn consumer_secret(&self) -> &Secret {
		&self.consumer_secret
	}

	/// Member access token.
	pub fn access_token(&self) -> &str {
		&self.access_token
	}

	/// Member access token secret.
	pub fn access_token_secret(&self) -> &Secret {
		&self.access_token_secret
	}
}
impl Debug for Credentials {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Credentials")
			.field("consumer_key", &self.consumer_key)
			.field("consumer_secret", &self.consumer_secret)
			.field("access_token", &self.access_token)
			.field("access_token_secret", &self.access_token_secret)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn lookup_reads_all_four_values() {
		let vars = BTreeMap::from([
			(ENV_CONSUMER_KEY, "ck"),
			(ENV_CONSUMER_SECRET, "cs"),
			(ENV_ACCESS_TOKEN, "at"),
			(ENV_ACCESS_TOKEN_SECRET, "ats"),
		]);
		let creds = Credentials::from_lookup(|name| vars.get(name).map(|v| v.to_string()))
			.expect("All variables are present.");

		assert_eq!(creds.consumer_key(), "ck");
		assert_eq!(creds.consumer_secret().expose(), "cs");
		assert_eq!(creds.access_token(), "at");
		assert_eq!(creds.access_token_secret().expose(), "ats");
	}

	#[test]
	fn lookup_names_the_missing_variable() {
		let vars = BTreeMap::from([(ENV_CONSUMER_KEY, "ck"), (ENV_CONSUMER_SECRET, "cs")]);
		let err = Credentials::from_lookup(|name| vars.get(name).map(|v| v.to_string()))
			.expect_err("Access token is missing.");

		assert!(matches!(err, ConfigError::MissingCredential { name: ENV_ACCESS_TOKEN }));
	}

	#[test]
	fn debug_redacts_secrets() {
		let creds = Credentials::new("ck", "consumer-secret", "at", "token-secret");
		let rendered = format!("{creds:?}");

		assert!(rendered.contains("ck"));
		assert!(!rendered.contains("consumer-secret"));
		assert!(!rendered.contains("token-secret"));
	}
}
