//! Billing Provider Gateway
//!
//! Implements [`domain_finance::ProviderPort`] against the external billing
//! provider's REST API: customer and payment listings arrive in `{"data"}`
//! envelopes, writes are plain JSON posts, and every call carries the
//! static `access_token` credential.

pub mod client;
pub mod wire;

pub use client::ProviderClient;
