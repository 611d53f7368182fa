//! Shopify client port trait
//!
//! Defines the interface for interacting with the Shopify Admin API.

use async_trait::async_trait;

use crate::domain::entities::{Product, ProductDraft, ShopDomain};
use crate::error::ShopifyError;

/// Port trait for Shopify Admin API operations
#[async_trait]
pub trait ShopifyClient: Send + Sync {
    /// Create a product and return it as stored by Shopify
    async fn create_product(
        &self,
        shop: &ShopDomain,
        access_token: &str,
        draft: &ProductDraft,
    ) -> Result<Product, ShopifyError>;
}
