//! Provider adapter layer consumed by identity-federation code.
//!
//! A [`ProviderAdapter`] exposes the capability operations every social-identity provider
//! offers (probe, identity, profile, status). [`LinkedInAdapter`] implements them on top of
//! the LinkedIn binding and [`ProviderRegistry`] dispatches by provider name.

pub mod adapter;
pub mod linkedin;
pub mod registry;

pub use adapter::*;
pub use linkedin::*;
pub use registry::*;
