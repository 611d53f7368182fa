//! Shopify Admin REST API client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::domain::entities::{Product, ProductDraft, ProductEnvelope, ShopDomain};
use crate::domain::ports::ShopifyClient;
use crate::error::ShopifyError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Implementation of the Shopify Admin API client
pub struct ShopifyClientImpl {
    http: Client,
    api_version: String,
    scheme: &'static str,
}

impl ShopifyClientImpl {
    pub fn new(api_version: String) -> Result<Self, ShopifyError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            api_version,
            scheme: "https",
        })
    }

    /// Plain HTTP, for talking to a local mock server
    #[cfg(test)]
    pub fn insecure(mut self) -> Self {
        self.scheme = "http";
        self
    }

    fn api_url(&self, shop: &ShopDomain, path: &str) -> String {
        format!(
            "{}://{}/admin/api/{}{}",
            self.scheme,
            shop.as_str(),
            self.api_version,
            path
        )
    }

    async fn handle_created<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ShopifyError> {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), body = %text, "Shopify response");

        match status {
            StatusCode::CREATED => serde_json::from_str(&text)
                .map_err(|e| ShopifyError::Deserialization(e.to_string())),
            StatusCode::UNAUTHORIZED => Err(ShopifyError::Unauthorized),
            StatusCode::TOO_MANY_REQUESTS => Err(ShopifyError::RateLimited),
            _ => Err(ShopifyError::Api {
                status: status.as_u16(),
                message: text,
            }),
        }
    }
}

#[derive(Deserialize)]
struct ProductResponse {
    product: Product,
}

/// First few characters of a token, for diagnostics
fn token_preview(token: &str) -> String {
    let prefix: String = token.chars().take(5).collect();
    format!("{}...", prefix)
}

#[async_trait]
impl ShopifyClient for ShopifyClientImpl {
    async fn create_product(
        &self,
        shop: &ShopDomain,
        access_token: &str,
        draft: &ProductDraft,
    ) -> Result<Product, ShopifyError> {
        let url = self.api_url(shop, "/products.json");

        tracing::debug!(
            shop = %shop,
            url = %url,
            token = %token_preview(access_token),
            "Creating Shopify product"
        );

        let response = self
            .http
            .post(&url)
            .header("X-Shopify-Access-Token", access_token)
            .json(&ProductEnvelope { product: draft })
            .send()
            .await?;

        let created: ProductResponse = self.handle_created(response).await?;
        Ok(created.product)
    }
}
