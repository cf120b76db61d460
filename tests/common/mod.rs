//! Helpers shared by the integration tests.

#![allow(dead_code)]

// std
use std::sync::{
	Arc,
	atomic::{AtomicUsize, Ordering},
};
// crates.io
use parking_lot::Mutex;
// self
use linkedin_oauth1::{
	auth::Credentials,
	client::{ReqwestSignedClient, SignedClient},
	config::ClientConfig,
	http::{
		ApiHttpClient, ApiRequest, ApiResponse, HttpFuture, NetworkErrorMapper, ReqwestHttpClient,
		ReqwestTransportErrorMapper,
	},
	reqwest::Client as ReqwestClient,
	linkedin::{LinkedIn, ReqwestLinkedIn},
};

pub const CONSUMER_KEY: &str = "it-consumer-key";
pub const ACCESS_TOKEN: &str = "it-access-token";

pub const PROFILE_PATH: &str = "/v1/people/~:(id,first-name,last-name,headline,industry,site-standard-profile-request,public-profile-url,picture-url,summary)";

pub const JANE_DOE: &str = r#"{
	"id": "123",
	"firstName": "Jane",
	"lastName": "Doe",
	"headline": "Engineer",
	"publicProfileUrl": "http://www.linkedin.com/in/janedoe",
	"pictureUrl": "http://media.linkedin.com/jane.png"
}"#;

pub fn credentials() -> Credentials {
	Credentials::new(CONSUMER_KEY, "it-consumer-secret", ACCESS_TOKEN, "it-access-token-secret")
}

pub fn config(base_url: &str) -> ClientConfig {
	ClientConfig::default()
		.with_api_base_url(base_url)
		.expect("Mock API base URL should parse successfully.")
}

/// Reqwest transport accepting the self-signed certificates `httpmock` serves over HTTPS.
pub fn insecure_http_client() -> ReqwestHttpClient {
	let client = ReqwestClient::builder()
		.danger_accept_invalid_certs(true)
		.build()
		.expect("Failed to build insecure Reqwest client for tests.");

	ReqwestHttpClient::with_client(client)
}

pub fn signed_client(base_url: &str) -> ReqwestSignedClient {
	SignedClient::with_http_client(
		credentials(),
		config(base_url),
		insecure_http_client(),
		ReqwestTransportErrorMapper,
	)
}

pub fn linkedin(base_url: &str) -> ReqwestLinkedIn {
	LinkedIn::from_client(signed_client(base_url))
}

/// Transport that records every request and replays one canned response.
#[derive(Default)]
pub struct RecordingTransport {
	pub response: ApiResponse,
	pub calls: AtomicUsize,
	pub requests: Mutex<Vec<ApiRequest>>,
}
impl RecordingTransport {
	pub fn responding(status: u16, body: &str) -> Arc<Self> {
		Arc::new(Self {
			response: ApiResponse {
				status,
				content_type: Some("application/json".into()),
				body: body.as_bytes().to_vec(),
			},
			..Default::default()
		})
	}

	pub fn calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}
impl ApiHttpClient for RecordingTransport {
	type TransportError = std::io::Error;

	fn execute(&self, request: ApiRequest) -> HttpFuture<'_, ApiResponse, Self::TransportError> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		self.requests.lock().push(request);

		let response = self.response.clone();

		Box::pin(async move { Ok(response) })
	}
}

pub type RecordingLinkedIn = LinkedIn<RecordingTransport, NetworkErrorMapper>;

pub fn recording_linkedin(transport: Arc<RecordingTransport>) -> RecordingLinkedIn {
	LinkedIn::from_client(SignedClient::with_http_client(
		credentials(),
		ClientConfig::default(),
		transport,
		NetworkErrorMapper,
	))
}
