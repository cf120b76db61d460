//! Response decoding targets and the JSON codec injected into the signed client.
//!
//! Every request goes through one signing/dispatch path; the target type alone selects how
//! the body is interpreted. [`Json<T>`] deserializes through the client's [`JsonCodec`] and
//! [`String`] keeps the raw text.

// crates.io
use serde::de::DeserializeOwned;
// self
use crate::{_prelude::*, error::DecodeError};

const DEFAULT_ACCEPT: &str = "application/json";

/// Shape a response body can be decoded into.
pub trait DecodeTarget
where
	Self: Sized,
{
	/// Decodes `body` using the client's configured `codec`.
	fn decode(codec: &JsonCodec, body: &[u8]) -> Result<Self, DecodeError>;
}

/// Raw text target.
impl DecodeTarget for String {
	fn decode(_codec: &JsonCodec, body: &[u8]) -> Result<Self, DecodeError> {
		Ok(String::from_utf8(body.to_vec())?)
	}
}

/// Typed JSON target wrapping the deserialized value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Json<T>(pub T);
impl<T> Json<T> {
	/// Unwraps the decoded value.
	pub fn into_inner(self) -> T {
		self.0
	}
}
impl<T> DecodeTarget for Json<T>
where
	T: DeserializeOwned,
{
	fn decode(codec: &JsonCodec, body: &[u8]) -> Result<Self, DecodeError> {
		codec.decode(body).map(Json)
	}
}

/// JSON decoder configured once at client construction.
///
/// Besides decoding, the codec owns the request headers that negotiate JSON with the remote
/// API, so the negotiation and the decoder can never drift apart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JsonCodec {
	accept: String,
	request_headers: BTreeMap<String, String>,
	preview_limit: usize,
}
impl Default for JsonCodec {
	fn default() -> Self {
		Self {
			accept: DEFAULT_ACCEPT.into(),
			request_headers: BTreeMap::new(),
			preview_limit: Self::DEFAULT_PREVIEW_LIMIT,
		}
	}
}
impl JsonCodec {
	const DEFAULT_PREVIEW_LIMIT: usize = 256;

	/// Overrides the `Accept` header value.
	pub fn with_accept(mut self, accept: impl Into<String>) -> Self {
		self.accept = accept.into();

		self
	}

	/// Adds a header sent with every request decoded by this codec.
	pub fn with_request_header(
		mut self,
		name: impl AsRef<str>,
		value: impl Into<String>,
	) -> Self {
		self.request_headers.insert(name.as_ref().to_ascii_lowercase(), value.into());

		self
	}

	/// Limits how many characters of an undecodable body are kept for diagnostics.
	pub fn with_preview_limit(mut self, limit: usize) -> Self {
		self.preview_limit = limit;

		self
	}

	/// `Accept` header value.
	pub fn accept(&self) -> &str {
		&self.accept
	}

	/// Extra negotiation headers (lower-case names).
	pub fn request_headers(&self) -> &BTreeMap<String, String> {
		&self.request_headers
	}

	/// Deserializes `body`, reporting the failing JSON path on mismatch.
	pub fn decode<T>(&self, body: &[u8]) -> Result<T, DecodeError>
	where
		T: DeserializeOwned,
	{
		let de = &mut serde_json::Deserializer::from_slice(body);

		serde_path_to_error::deserialize(de)
			.map_err(|source| DecodeError::Json { source, body_preview: self.preview(body) })
	}

	/// Lossy, truncated rendering of `body` for error messages.
	pub fn preview(&self, body: &[u8]) -> String {
		let text = String::from_utf8_lossy(body);

		if text.chars().count() <= self.preview_limit {
			return text.into_owned();
		}

		let mut buf = text.chars().take(self.preview_limit).collect::<String>();

		buf.push('…');

		buf
	}
}
