//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod health;
pub mod process;

pub use health::health;
pub use process::process_upload;
