//! Runtime choice of secret backend

use async_trait::async_trait;

use super::{SecretManagerStore, StaticSecretStore};
use crate::domain::ports::SecretStore;
use crate::error::SecretError;

/// Secret backend selected from configuration at startup
pub enum SecretSource {
    Static(StaticSecretStore),
    SecretManager(SecretManagerStore),
}

impl SecretSource {
    pub fn kind(&self) -> &'static str {
        match self {
            SecretSource::Static(_) => "environment",
            SecretSource::SecretManager(_) => "secret-manager",
        }
    }
}

#[async_trait]
impl SecretStore for SecretSource {
    async fn access_secret(&self, name: &str) -> Result<String, SecretError> {
        match self {
            SecretSource::Static(store) => store.access_secret(name).await,
            SecretSource::SecretManager(store) => store.access_secret(name).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_source_returns_trimmed_token() {
        let source = SecretSource::Static(StaticSecretStore::new(" shpat_dev \n".into()));
        assert_eq!(source.kind(), "environment");
        assert_eq!(
            source.access_secret("shopify-admin-api-token").await.unwrap(),
            "shpat_dev"
        );
    }
}
