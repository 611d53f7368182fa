//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::config::Config;
use crate::domain::entities::StorageObjectEvent;

pub const TEST_TOKEN_SECRET: &str = "shopify-admin-api-token";
pub const TEST_ACCESS_TOKEN: &str = "shpat_test_token";

/// Create a test configuration pointing at a fake shop
pub fn test_config() -> Config {
    Config {
        port: 8080,
        worker_threads: 8,
        project_id: "douga-auto-system".to_string(),
        originals_bucket: "douga-auto-system-originals".to_string(),
        processed_bucket: "douga-auto-system-processed".to_string(),
        shop_domain: Some("https://douga-test.myshopify.com/".to_string()),
        shopify_api_version: "2024-04".to_string(),
        shopify_token_secret: TEST_TOKEN_SECRET.to_string(),
        shopify_access_token: None,
        default_product_price: 500.0,
        watermark_file: "watermark.png".to_string(),
        ffmpeg_bin: "ffmpeg".to_string(),
        ingress_token: None,
    }
}

/// Create an upload notification from the originals bucket
pub fn test_event(name: &str) -> StorageObjectEvent {
    StorageObjectEvent {
        bucket: "douga-auto-system-originals".to_string(),
        name: name.to_string(),
        content_type: Some("video/mp4".to_string()),
        size: Some("1048576".into()),
        generation: None,
    }
}
