//! Storage upload notification

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DomainError;

/// Cloud Storage "object finalized" notification as posted to `/process`.
///
/// Only `bucket` and `name` are used; the rest is carried for logging and
/// accepted in whatever JSON shape the sender uses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageObjectEvent {
    pub bucket: String,
    pub name: String,
    #[serde(default, rename = "contentType")]
    pub content_type: Option<String>,
    #[serde(default)]
    pub size: Option<Value>,
    #[serde(default)]
    pub generation: Option<Value>,
}

impl StorageObjectEvent {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.bucket.trim().is_empty() {
            return Err(DomainError::Validation("bucket must not be empty".into()));
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::Validation("name must not be empty".into()));
        }
        Ok(())
    }

    /// `gs://bucket/name`
    pub fn uri(&self) -> String {
        format!("gs://{}/{}", self.bucket, self.name)
    }
}
