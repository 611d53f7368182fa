//! Shopify adapter
//!
//! Implementation of the Shopify Admin API client.

pub mod client;

pub use client::ShopifyClientImpl;
