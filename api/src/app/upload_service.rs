//! Upload processing service
//!
//! Turns a storage upload notification into a draft product listing.

use std::sync::Arc;

use crate::config::Config;
use crate::domain::entities::{Product, ProductDraft, ShopDomain, StorageObjectEvent};
use crate::domain::ports::{SecretStore, ShopifyClient};
use crate::error::AppError;

/// Service creating storefront listings for uploaded media
pub struct UploadService<S, C>
where
    S: SecretStore,
    C: ShopifyClient,
{
    secrets: Arc<S>,
    shopify: Arc<C>,
    shop_domain: Option<String>,
    token_secret: String,
    product_price: f64,
    originals_bucket: String,
}

impl<S, C> UploadService<S, C>
where
    S: SecretStore,
    C: ShopifyClient,
{
    pub fn new(secrets: Arc<S>, shopify: Arc<C>, config: &Config) -> Self {
        Self {
            secrets,
            shopify,
            shop_domain: config.shop_domain.clone(),
            token_secret: config.shopify_token_secret.clone(),
            product_price: config.default_product_price,
            originals_bucket: config.originals_bucket.clone(),
        }
    }

    /// Create a draft product for an uploaded file
    pub async fn process_upload(&self, event: &StorageObjectEvent) -> Result<Product, AppError> {
        event.validate()?;

        if event.bucket != self.originals_bucket {
            tracing::warn!(
                bucket = %event.bucket,
                expected = %self.originals_bucket,
                "Upload event from unexpected bucket"
            );
        }

        let shop = ShopDomain::parse(self.shop_domain.as_deref().unwrap_or_default())
            .map_err(|e| AppError::Internal(e.to_string()))?;

        let access_token = self
            .secrets
            .access_secret(&self.token_secret)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, secret = %self.token_secret, "Failed to get Shopify access token");
                e
            })?;

        let draft = ProductDraft::for_upload(&event.name, self.product_price);
        let product = self
            .shopify
            .create_product(&shop, &access_token, &draft)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, file = %event.name, "Shopify product creation failed");
                e
            })?;

        tracing::info!(
            product_id = product.id,
            title = %product.title,
            file = %event.uri(),
            "Product created for upload"
        );

        Ok(product)
    }
}
