//! Google Cloud adapter
//!
//! Metadata server tokens and Secret Manager access over REST.

pub mod metadata;
pub mod secret_manager;

pub use metadata::DEFAULT_METADATA_URL;
pub use secret_manager::{
    SecretManagerStore, DEFAULT_REQUEST_TIMEOUT, DEFAULT_SECRET_MANAGER_URL,
};
