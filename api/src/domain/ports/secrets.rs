//! Secret store port trait

use async_trait::async_trait;

use crate::error::SecretError;

/// Port trait for reading secrets
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Latest version of a secret, UTF-8 decoded and trimmed
    async fn access_secret(&self, name: &str) -> Result<String, SecretError>;
}
