//! Crate-level error types shared by the signed client, the LinkedIn binding, and adapters.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem (bad URL, template, or HTTP client setup).
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS, timeout).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Remote API rejected the credentials or token.
	#[error(transparent)]
	Auth(#[from] AuthError),
	/// Response body did not match the requested shape.
	#[error(transparent)]
	Decode(#[from] DecodeError),
	/// Remote API answered with a non-success status that is not an authorization failure.
	#[error(transparent)]
	Api(#[from] ApiError),
}
impl Error {
	/// Returns `true` when the remote API rejected the credentials or token.
	pub fn is_auth(&self) -> bool {
		matches!(self, Self::Auth(_))
	}

	/// Returns `true` for every failure the remote side classified as a 4xx client error,
	/// authorization failures included.
	pub fn is_client_error(&self) -> bool {
		match self {
			Self::Auth(_) => true,
			Self::Api(e) => e.is_client_error(),
			_ => false,
		}
	}

	/// HTTP status attached to the failure, when the remote API produced one.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Auth(e) => Some(e.status()),
			Self::Api(e) => Some(e.status),
			_ => None,
		}
	}
}

/// Configuration and validation failures raised before any request leaves the process.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// API base URL cannot be parsed or cannot carry a path.
	#[error("API base URL `{url}` is invalid.")]
	InvalidBaseUrl {
		/// Offending URL text.
		url: String,
		/// Underlying parsing failure, if any.
		#[source]
		source: Option<url::ParseError>,
	},
	/// Expanded endpoint cannot be resolved into a URL.
	#[error("Endpoint `{endpoint}` cannot be resolved into a URL.")]
	InvalidEndpoint {
		/// Expanded endpoint text.
		endpoint: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// URL template contains an unterminated `{` placeholder.
	#[error("URL template `{template}` contains an unterminated placeholder.")]
	MalformedTemplate {
		/// Offending template.
		template: String,
	},
	/// URL template placeholders and supplied parameters disagree in number.
	#[error("URL template `{template}` expects {expected} parameter(s) but {supplied} were supplied.")]
	TemplateArity {
		/// Offending template.
		template: String,
		/// Distinct placeholders found in the template.
		expected: usize,
		/// Parameters supplied by the caller.
		supplied: usize,
	},
	/// HMAC key could not be initialized from the credential secrets.
	#[error("Signing key could not be initialized.")]
	SigningKey,
	/// A required credential is absent from the environment.
	#[error("Environment variable `{name}` is not set.")]
	MissingCredential {
		/// Environment variable name.
		name: &'static str,
	},
	/// No adapter is registered for the requested provider.
	#[error("No adapter is registered for provider `{provider}`.")]
	UnknownProvider {
		/// Requested provider name.
		provider: String,
	},
	/// Provider identifier failed validation.
	#[error(transparent)]
	InvalidProviderId(#[from] crate::auth::IdentifierError),
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying HTTP client gave up waiting for the API.
	#[error("Request timed out while calling the API.")]
	Timeout {
		/// Transport-specific timeout error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the API.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}

	/// Wraps a transport-specific timeout error.
	pub fn timeout(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Timeout { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		if e.is_timeout() { Self::timeout(e) } else { Self::network(e) }
	}
}

/// Authorization failures reported by the remote API.
#[derive(Debug, ThisError)]
pub enum AuthError {
	/// Credentials or token were rejected (expired, revoked, or badly signed).
	#[error("API rejected the OAuth credentials (HTTP {status}): {message}.")]
	Rejected {
		/// HTTP status code.
		status: u16,
		/// Provider-supplied message or body preview.
		message: String,
		/// Provider request identifier, when available.
		request_id: Option<String>,
	},
	/// Credentials are valid but lack access to the resource.
	#[error("API denied access to the resource (HTTP {status}): {message}.")]
	Forbidden {
		/// HTTP status code.
		status: u16,
		/// Provider-supplied message or body preview.
		message: String,
		/// Provider request identifier, when available.
		request_id: Option<String>,
	},
}
impl AuthError {
	/// HTTP status code attached to the failure.
	pub fn status(&self) -> u16 {
		match self {
			Self::Rejected { status, .. } | Self::Forbidden { status, .. } => *status,
		}
	}

	/// Provider-supplied message or body preview.
	pub fn message(&self) -> &str {
		match self {
			Self::Rejected { message, .. } | Self::Forbidden { message, .. } => message,
		}
	}
}

/// Response body could not be decoded into the requested target.
#[derive(Debug, ThisError)]
pub enum DecodeError {
	/// JSON body is malformed or does not match the requested shape.
	#[error("Response body does not match the expected shape at `{}`.", .source.path())]
	Json {
		/// Structured parsing failure including the JSON path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// Preview of the offending body.
		body_preview: String,
	},
	/// Text body is not valid UTF-8.
	#[error("Response body is not valid UTF-8.")]
	Utf8(#[from] std::string::FromUtf8Error),
}
impl DecodeError {
	/// JSON path at which decoding failed, when the failure was structural.
	pub fn path(&self) -> Option<String> {
		match self {
			Self::Json { source, .. } => Some(source.path().to_string()),
			Self::Utf8(_) => None,
		}
	}
}

/// Non-success response that is not an authorization failure.
#[derive(Debug, ThisError)]
#[error("API responded with HTTP {status}: {message}.")]
pub struct ApiError {
	/// HTTP status code.
	pub status: u16,
	/// Provider-supplied message or body preview.
	pub message: String,
	/// Provider request identifier, when available.
	pub request_id: Option<String>,
}
impl ApiError {
	/// Returns `true` for 4xx statuses.
	pub fn is_client_error(&self) -> bool {
		(400..500).contains(&self.status)
	}

	/// Returns `true` for 5xx statuses.
	pub fn is_server_error(&self) -> bool {
		self.status >= 500
	}
}
