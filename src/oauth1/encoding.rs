//! RFC 3986 percent-encoding used for OAuth 1.0a parameters and base strings.

// crates.io
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Everything except `ALPHA / DIGIT / "-" / "." / "_" / "~"` is escaped.
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// Percent-encodes `value` as required by RFC 5849 section 3.6 (upper-case hex, UTF-8 octets).
pub fn percent_encode(value: &str) -> String {
	utf8_percent_encode(value, UNRESERVED).to_string()
}
