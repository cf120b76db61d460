mod common;

// crates.io
use httpmock::prelude::*;
use serde::Deserialize;
// self
use linkedin_oauth1::{
	decode::Json,
	error::{ApiError, AuthError, DecodeError, Error, TransportError},
};

#[derive(Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Member {
	id: String,
	first_name: String,
	connections: Vec<String>,
}

#[tokio::test]
async fn typed_get_returns_the_mock_payload() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/v1/people/42")
				.query_param("format", "json")
				.header("accept", "application/json")
				.header_exists("authorization");
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"id":"42","firstName":"Ada","connections":["a","b"]}"#);
		})
		.await;
	let client = common::signed_client(&server.url("/v1"));
	let Json(member) = client
		.get::<Json<Member>>("people/{id}?format=json", &["42"])
		.await
		.expect("Typed GET should succeed.");

	assert_eq!(member, Member {
		id: "42".into(),
		first_name: "Ada".into(),
		connections: vec!["a".into(), "b".into()],
	});

	mock.assert_async().await;
}

#[tokio::test]
async fn text_get_returns_the_raw_body() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/people/~");
			then.status(200).body("{ \"not\": \"parsed\" }");
		})
		.await;
	let client = common::signed_client(&server.url("/v1/"));
	let raw = client.get::<String>("people/~", &[]).await.expect("Raw GET should succeed.");

	assert_eq!(raw, "{ \"not\": \"parsed\" }");

	mock.assert_async().await;
}

#[tokio::test]
async fn authorization_header_names_the_credentials() {
	let server = MockServer::start_async().await;
	let client = common::signed_client(&server.url("/v1/"));
	let url = client.resolve("people/~", &[]).expect("Template should resolve.");
	let request = client.sign(url).expect("Signing should succeed.");
	let header = request.header("authorization").expect("Authorization header is set.");

	assert!(header.starts_with("OAuth "));
	assert!(header.contains(&format!("oauth_consumer_key=\"{}\"", common::CONSUMER_KEY)));
	assert!(header.contains(&format!("oauth_token=\"{}\"", common::ACCESS_TOKEN)));
	assert!(header.contains("oauth_signature_method=\"HMAC-SHA1\""));
	assert!(header.contains("oauth_signature=\""));
}

#[tokio::test]
async fn unauthorized_responses_surface_auth_errors() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/people/~");
			then.status(401).header("content-type", "application/json").body(
				r#"{"errorCode":0,"message":"[unauthorized]. The token used in the OAuth request is not valid.","requestId":"ABC","status":401}"#,
			);
		})
		.await;
	let client = common::signed_client(&server.url("/v1/"));
	let err = client.get::<String>("people/~", &[]).await.expect_err("401 should fail.");

	match err {
		Error::Auth(AuthError::Rejected { status, ref request_id, .. }) => {
			assert_eq!(status, 401);
			assert_eq!(request_id.as_deref(), Some("ABC"));
		},
		other => panic!("Unexpected error variant: {other:?}."),
	}

	mock.assert_async().await;
}

#[tokio::test]
async fn other_failures_surface_api_errors() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/people/missing");
			then.status(404).body("Not Found");
		})
		.await;
	let client = common::signed_client(&server.url("/v1/"));
	let err = client.get::<String>("people/missing", &[]).await.expect_err("404 should fail.");

	assert!(matches!(
		err,
		Error::Api(ApiError { status: 404, ref message, .. }) if message == "Not Found"
	));

	mock.assert_async().await;
}

#[tokio::test]
async fn mismatched_bodies_surface_decode_errors_with_path() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/people/42");
			then.status(200).body(r#"{"id":"42","firstName":"Ada","connections":[1]}"#);
		})
		.await;
	let client = common::signed_client(&server.url("/v1/"));
	let err = client
		.get::<Json<Member>>("people/{id}", &["42"])
		.await
		.expect_err("Numbers are not strings.");

	match err {
		Error::Decode(ref decode @ DecodeError::Json { .. }) => {
			assert_eq!(decode.path().as_deref(), Some("connections[0]"));
		},
		other => panic!("Unexpected error variant: {other:?}."),
	}

	mock.assert_async().await;
}

#[tokio::test]
async fn unreachable_hosts_surface_transport_errors() {
	let client = common::signed_client("http://127.0.0.1:9/v1/");
	let err = client.get::<String>("people/~", &[]).await.expect_err("Nothing listens on port 9.");

	assert!(matches!(err, Error::Transport(TransportError::Network { .. })));
}
