//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod gcp;
pub mod media;
pub mod secret_source;
pub mod shopify;
pub mod static_secrets;

pub use gcp::{
    SecretManagerStore, DEFAULT_METADATA_URL, DEFAULT_REQUEST_TIMEOUT, DEFAULT_SECRET_MANAGER_URL,
};
pub use media::MediaToolchain;
pub use secret_source::SecretSource;
pub use shopify::ShopifyClientImpl;
pub use static_secrets::StaticSecretStore;
