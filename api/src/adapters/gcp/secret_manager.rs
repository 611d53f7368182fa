//! Secret Manager implementation of the secret store port

use std::time::Duration;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use urlencoding::encode;

use super::metadata::MetadataTokenSource;
use crate::domain::ports::SecretStore;
use crate::error::SecretError;

pub const DEFAULT_SECRET_MANAGER_URL: &str = "https://secretmanager.googleapis.com";

/// Budget for each metadata or Secret Manager call
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Deserialize)]
struct AccessSecretVersionResponse {
    payload: SecretPayload,
}

#[derive(Deserialize)]
struct SecretPayload {
    data: String,
}

/// Reads the latest version of secrets in one project
pub struct SecretManagerStore {
    http: Client,
    project_id: String,
    endpoint: String,
    tokens: MetadataTokenSource,
}

impl SecretManagerStore {
    pub fn new(
        project_id: String,
        endpoint: String,
        metadata_url: String,
        timeout: Duration,
    ) -> Result<Self, SecretError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            tokens: MetadataTokenSource::new(http.clone(), metadata_url),
            http,
            project_id,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    fn version_url(&self, name: &str) -> String {
        format!(
            "{}/v1/projects/{}/secrets/{}/versions/latest:access",
            self.endpoint,
            encode(&self.project_id),
            encode(name)
        )
    }
}

fn decode_payload(data: &str) -> Result<String, SecretError> {
    let bytes = STANDARD
        .decode(data)
        .map_err(|e| SecretError::Payload(e.to_string()))?;
    let text = String::from_utf8(bytes).map_err(|e| SecretError::Payload(e.to_string()))?;
    Ok(text.trim().to_string())
}

#[async_trait]
impl SecretStore for SecretManagerStore {
    async fn access_secret(&self, name: &str) -> Result<String, SecretError> {
        let token = self.tokens.access_token().await?;
        let url = self.version_url(name);
        tracing::debug!(secret = %name, project = %self.project_id, "Accessing secret version");

        let response = self.http.get(&url).bearer_auth(token).send().await?;
        let status = response.status();

        match status {
            s if s.is_success() => {
                let body: AccessSecretVersionResponse = response
                    .json()
                    .await
                    .map_err(|e| SecretError::Payload(e.to_string()))?;
                decode_payload(&body.payload.data)
            }
            StatusCode::NOT_FOUND => Err(SecretError::NotFound(name.to_string())),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(SecretError::PermissionDenied(name.to_string()))
            }
            _ => {
                let message = response.text().await.unwrap_or_default();
                Err(SecretError::Api {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }
}
