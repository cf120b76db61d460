//! LinkedIn REST bindings on top of an OAuth 1.0a request-signing client, plus a provider
//! adapter that lets identity-federation layers treat LinkedIn as one pluggable provider.
//!
//! The crate is layered bottom-up:
//!
//! - [`oauth1`] computes RFC 5849 HMAC-SHA1 signatures and `Authorization` headers.
//! - [`client::SignedClient`] expands URL templates, signs, dispatches through an
//!   [`http::ApiHttpClient`], classifies failures, and decodes bodies via [`decode`].
//! - [`linkedin::LinkedIn`] maps the fixed LinkedIn endpoints onto typed calls.
//! - [`connect`] exposes the [`connect::ProviderAdapter`] capability trait and a name-keyed
//!   [`connect::ProviderRegistry`].

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod client;
pub mod config;
pub mod connect;
pub mod decode;
pub mod error;
pub mod http;
pub mod linkedin;
pub mod oauth1;
pub mod obs;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		auth::Credentials,
		client::SignedClient,
		config::ClientConfig,
		http::{ReqwestHttpClient, ReqwestTransportErrorMapper},
		linkedin::{LinkedIn, ReqwestLinkedIn},
	};

	/// Consumer key used by the test helpers.
	pub const TEST_CONSUMER_KEY: &str = "test-consumer-key";
	/// Access token used by the test helpers.
	pub const TEST_ACCESS_TOKEN: &str = "test-access-token";

	/// Signed client type alias used by reqwest-backed integration tests.
	pub type ReqwestTestClient = SignedClient<ReqwestHttpClient, ReqwestTransportErrorMapper>;

	/// Builds a reqwest HTTP client that accepts the self-signed certificates produced by
	/// `httpmock` during tests.
	pub fn test_reqwest_http_client() -> ReqwestHttpClient {
		let client = ReqwestClient::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()
			.expect("Failed to build insecure Reqwest client for tests.");

		ReqwestHttpClient::with_client(client)
	}

	/// Fixed credentials shared across tests.
	pub fn test_credentials() -> Credentials {
		Credentials::new(
			TEST_CONSUMER_KEY,
			"test-consumer-secret",
			TEST_ACCESS_TOKEN,
			"test-access-token-secret",
		)
	}

	/// Constructs a [`SignedClient`] rooted at `base_url` (typically `MockServer::url("/v1/")`).
	pub fn build_reqwest_test_client(base_url: &str) -> ReqwestTestClient {
		let config = ClientConfig::default()
			.with_api_base_url(base_url)
			.expect("Mock API base URL should parse successfully.");

		SignedClient::with_http_client(
			test_credentials(),
			config,
			test_reqwest_http_client(),
			ReqwestTransportErrorMapper,
		)
	}

	/// Constructs a [`LinkedIn`] binding rooted at `base_url`.
	pub fn build_reqwest_test_linkedin(base_url: &str) -> ReqwestLinkedIn {
		LinkedIn::from_client(build_reqwest_test_client(base_url))
	}
}

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	pub use parking_lot::RwLock;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(all(test, feature = "reqwest"))] use {httpmock as _, tokio as _};
