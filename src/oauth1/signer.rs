//! Signature base strings, HMAC-SHA1 signatures, and `Authorization` headers.

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
use hmac::{Hmac, Mac};
use rand::{Rng, distr::Alphanumeric};
use sha1::Sha1;
use time::OffsetDateTime;
// self
use crate::{_prelude::*, auth::Credentials, error::ConfigError, oauth1::percent_encode};

type HmacSha1 = Hmac<Sha1>;

/// Value of `oauth_signature_method`.
pub const SIGNATURE_METHOD: &str = "HMAC-SHA1";
/// Value of `oauth_version`.
pub const OAUTH_VERSION: &str = "1.0";

const NONCE_LEN: usize = 32;

/// Freshness values (`oauth_nonce` + `oauth_timestamp`) bound to exactly one request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Nonce {
	/// Random alphanumeric nonce.
	pub value: String,
	/// Seconds since the Unix epoch.
	pub timestamp: i64,
}
impl Nonce {
	/// Generates a random nonce stamped with the current time.
	pub fn fresh() -> Self {
		Self {
			value: rand::rng().sample_iter(Alphanumeric).take(NONCE_LEN).map(char::from).collect(),
			timestamp: OffsetDateTime::now_utc().unix_timestamp(),
		}
	}

	/// Uses caller-supplied freshness values; intended for reproducible signatures.
	pub fn new(value: impl Into<String>, timestamp: i64) -> Self {
		Self { value: value.into(), timestamp }
	}
}

/// Signs requests with a fixed credential tuple.
#[derive(Clone, Debug)]
pub struct OAuth1Signer {
	credentials: Credentials,
}
impl OAuth1Signer {
	/// Creates a signer that owns `credentials`.
	pub fn new(credentials: Credentials) -> Self {
		Self { credentials }
	}

	/// Credentials used for every signature.
	pub fn credentials(&self) -> &Credentials {
		&self.credentials
	}

	/// Builds the `Authorization` header for a request whose only parameters live in `url`'s
	/// query string.
	pub fn authorization_header(
		&self,
		method: &str,
		url: &Url,
		nonce: &Nonce,
	) -> Result<String, ConfigError> {
		self.authorization_header_with(method, url, &[], nonce)
	}

	// `extra_params` covers form body fields, which only the reference vector exercises.
	fn authorization_header_with(
		&self,
		method: &str,
		url: &Url,
		extra_params: &[(String, String)],
		nonce: &Nonce,
	) -> Result<String, ConfigError> {
		let protocol = self.protocol_params(nonce);
		let mut params = url
			.query_pairs()
			.map(|(key, value)| (key.into_owned(), value.into_owned()))
			.collect::<Vec<_>>();

		params.extend(extra_params.iter().cloned());
		params.extend(protocol.iter().map(|(key, value)| ((*key).to_owned(), value.clone())));

		let base = signature_base_string(method, url, &params);
		let signature = self.sign(&base)?;
		let fields = protocol
			.iter()
			.map(|(key, value)| (*key, value.as_str()))
			.chain([("oauth_signature", signature.as_str())])
			.collect::<BTreeMap<_, _>>();
		let rendered = fields
			.into_iter()
			.map(|(key, value)| format!("{}=\"{}\"", percent_encode(key), percent_encode(value)))
			.collect::<Vec<_>>()
			.join(", ");

		Ok(format!("OAuth {rendered}"))
	}

	/// Computes the base64 HMAC-SHA1 signature of `base` keyed by
	/// `enc(consumer_secret)&enc(token_secret)`.
	pub fn sign(&self, base: &str) -> Result<String, ConfigError> {
		let key = format!(
			"{}&{}",
			percent_encode(self.credentials.consumer_secret().expose()),
			percent_encode(self.credentials.access_token_secret().expose()),
		);
		let mut mac =
			<HmacSha1 as Mac>::new_from_slice(key.as_bytes()).map_err(|_| ConfigError::SigningKey)?;

		mac.update(base.as_bytes());

		Ok(STANDARD.encode(mac.finalize().into_bytes()))
	}

	fn protocol_params(&self, nonce: &Nonce) -> [(&'static str, String); 6] {
		[
			("oauth_consumer_key", self.credentials.consumer_key().to_owned()),
			("oauth_nonce", nonce.value.clone()),
			("oauth_signature_method", SIGNATURE_METHOD.to_owned()),
			("oauth_timestamp", nonce.timestamp.to_string()),
			("oauth_token", self.credentials.access_token().to_owned()),
			("oauth_version", OAUTH_VERSION.to_owned()),
		]
	}
}

/// Builds `METHOD&enc(base-string-uri)&enc(normalized-parameters)`.
pub fn signature_base_string(method: &str, url: &Url, params: &[(String, String)]) -> String {
	format!(
		"{}&{}&{}",
		method.to_ascii_uppercase(),
		percent_encode(&base_string_uri(url)),
		percent_encode(&normalize_parameters(params)),
	)
}

/// Scheme, host, non-default port, and path of `url`; query and fragment are dropped.
pub fn base_string_uri(url: &Url) -> String {
	let scheme = url.scheme().to_ascii_lowercase();
	let host = url.host_str().unwrap_or_default().to_ascii_lowercase();

	match url.port() {
		Some(port) => format!("{scheme}://{host}:{port}{}", url.path()),
		None => format!("{scheme}://{host}{}", url.path()),
	}
}

/// Encodes every name/value, sorts by name then value, and joins as `name=value&...`.
pub fn normalize_parameters(params: &[(String, String)]) -> String {
	let mut encoded = params
		.iter()
		.map(|(key, value)| (percent_encode(key), percent_encode(value)))
		.collect::<Vec<_>>();

	encoded.sort();

	encoded.iter().map(|(key, value)| format!("{key}={value}")).collect::<Vec<_>>().join("&")
}
