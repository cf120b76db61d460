//! Classification of non-success responses into the crate error taxonomy.

// self
use crate::{
	_prelude::*,
	decode::JsonCodec,
	error::{ApiError, AuthError},
	http::ApiResponse,
};

/// Error document LinkedIn returns alongside non-success statuses.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorDocument {
	message: Option<String>,
	request_id: Option<String>,
}

/// Maps a non-2xx response onto [`AuthError`] or [`ApiError`].
///
/// 401 and 403 are authorization failures, as is any status whose body carries an OAuth
/// `oauth_problem` report. Everything else becomes an [`ApiError`].
pub(crate) fn classify_failure(codec: &JsonCodec, response: &ApiResponse) -> Error {
	let document = serde_json::from_slice::<ErrorDocument>(&response.body).unwrap_or_default();
	let request_id = document.request_id;
	let message = document
		.message
		.filter(|message| !message.is_empty())
		.unwrap_or_else(|| fallback_message(codec, &response.body));
	let status = response.status;

	match status {
		401 => AuthError::Rejected { status, message, request_id }.into(),
		403 => AuthError::Forbidden { status, message, request_id }.into(),
		_ if reports_oauth_problem(&response.body) =>
			AuthError::Rejected { status, message, request_id }.into(),
		_ => ApiError { status, message, request_id }.into(),
	}
}

fn fallback_message(codec: &JsonCodec, body: &[u8]) -> String {
	let preview = codec.preview(body);

	if preview.trim().is_empty() { "no message".into() } else { preview }
}

fn reports_oauth_problem(body: &[u8]) -> bool {
	String::from_utf8_lossy(body).contains("oauth_problem=")
}
