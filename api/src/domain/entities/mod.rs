//! Domain entities

pub mod product;
pub mod shop;
pub mod upload_event;

pub use product::{Product, ProductDraft, ProductEnvelope, ProductStatus, VariantDraft};
pub use shop::ShopDomain;
pub use upload_event::StorageObjectEvent;
