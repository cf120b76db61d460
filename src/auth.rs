//! Credential material and identifiers used by the signing client and provider registry.

pub mod credentials;
pub mod id;
pub mod secret;

pub use credentials::*;
pub use id::*;
pub use secret::*;
