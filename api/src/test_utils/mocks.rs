//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Product, ProductDraft, ProductStatus, ShopDomain};
use crate::domain::ports::{SecretStore, ShopifyClient};
use crate::error::{SecretError, ShopifyError};

// ============================================================================
// In-Memory Secret Store
// ============================================================================

#[derive(Default)]
pub struct InMemorySecretStore {
    secrets: Arc<RwLock<HashMap<String, String>>>,
    reads: Arc<RwLock<Vec<String>>>,
}

impl InMemorySecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a secret for testing
    pub fn with_secret(self, name: &str, value: &str) -> Self {
        self.secrets
            .write()
            .unwrap()
            .insert(name.to_string(), value.to_string());
        self
    }

    /// Names of secrets read so far, in order
    pub fn reads(&self) -> Vec<String> {
        self.reads.read().unwrap().clone()
    }
}

#[async_trait]
impl SecretStore for InMemorySecretStore {
    async fn access_secret(&self, name: &str) -> Result<String, SecretError> {
        self.reads.write().unwrap().push(name.to_string());
        self.secrets
            .read()
            .unwrap()
            .get(name)
            .map(|v| v.trim().to_string())
            .ok_or_else(|| SecretError::NotFound(name.to_string()))
    }
}

// ============================================================================
// Mock Shopify Client
// ============================================================================

/// A recorded `create_product` call
#[derive(Debug, Clone)]
pub struct CreateProductCall {
    pub shop: ShopDomain,
    pub access_token: String,
    pub draft: ProductDraft,
}

#[derive(Default)]
pub struct MockShopifyClient {
    calls: Arc<RwLock<Vec<CreateProductCall>>>,
    /// HTTP status to fail with, if any
    fail_with: Option<u16>,
}

impl MockShopifyClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every call fail with an API error of this status
    pub fn failing(status: u16) -> Self {
        Self {
            fail_with: Some(status),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<CreateProductCall> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl ShopifyClient for MockShopifyClient {
    async fn create_product(
        &self,
        shop: &ShopDomain,
        access_token: &str,
        draft: &ProductDraft,
    ) -> Result<Product, ShopifyError> {
        let mut calls = self.calls.write().unwrap();
        calls.push(CreateProductCall {
            shop: shop.clone(),
            access_token: access_token.to_string(),
            draft: draft.clone(),
        });

        if let Some(status) = self.fail_with {
            return Err(ShopifyError::Api {
                status,
                message: "mock failure".to_string(),
            });
        }

        Ok(Product {
            id: 1000 + calls.len() as i64,
            title: draft.title.clone(),
            status: Some(ProductStatus::Draft),
            handle: None,
            admin_graphql_api_id: None,
        })
    }
}
