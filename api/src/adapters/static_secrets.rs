//! Fixed-value secret store for local runs

use async_trait::async_trait;

use crate::domain::ports::SecretStore;
use crate::error::SecretError;

/// Returns the same token for every secret name
pub struct StaticSecretStore {
    value: String,
}

impl StaticSecretStore {
    pub fn new(value: String) -> Self {
        Self { value }
    }
}

#[async_trait]
impl SecretStore for StaticSecretStore {
    async fn access_secret(&self, name: &str) -> Result<String, SecretError> {
        tracing::debug!(secret = %name, "Using static secret from environment");
        Ok(self.value.trim().to_string())
    }
}
