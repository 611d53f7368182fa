//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod secrets;
pub mod shopify;

pub use secrets::SecretStore;
pub use shopify::ShopifyClient;
