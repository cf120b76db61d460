//! OAuth 1.0a (RFC 5849) request signing with HMAC-SHA1.
//!
//! `encoding` implements the RFC 3986 unreserved-set percent-encoding the protocol mandates,
//! while `signer` builds signature base strings, computes signatures, and renders the
//! `Authorization` header attached to every outbound request.

pub mod encoding;
pub mod signer;

pub use encoding::*;
pub use signer::*;
