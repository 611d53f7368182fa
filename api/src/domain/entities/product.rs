//! Shopify product entities

use serde::{Deserialize, Serialize, Serializer};

/// Product publication status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Active,
    Draft,
    Archived,
}

/// Single variant of a new product
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantDraft {
    /// Sent as a two-decimal string
    #[serde(serialize_with = "serialize_price")]
    pub price: f64,
}

/// Product to be created in the shop
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDraft {
    pub title: String,
    pub body_html: String,
    pub vendor: String,
    pub product_type: String,
    pub status: ProductStatus,
    #[serde(serialize_with = "serialize_tags")]
    pub tags: Vec<String>,
    pub variants: Vec<VariantDraft>,
}

impl ProductDraft {
    /// Draft listing for a newly uploaded video
    pub fn for_upload(file_name: &str, price: f64) -> Self {
        Self {
            title: format!("API Test Product - {}", file_name),
            body_html: "<strong>This is a test product created via API call.</strong>"
                .to_string(),
            vendor: "API Test".to_string(),
            product_type: "Digital Goods".to_string(),
            status: ProductStatus::Draft,
            tags: vec!["test".into(), "api".into(), "video".into()],
            variants: vec![VariantDraft { price }],
        }
    }
}

/// Request envelope for `POST /products.json`
#[derive(Debug, Serialize)]
pub struct ProductEnvelope<'a> {
    pub product: &'a ProductDraft,
}

/// Product as returned by Shopify
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub status: Option<ProductStatus>,
    #[serde(default)]
    pub handle: Option<String>,
    #[serde(default)]
    pub admin_graphql_api_id: Option<String>,
}

fn serialize_tags<S: Serializer>(tags: &[String], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&tags.join(", "))
}

fn serialize_price<S: Serializer>(price: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{:.2}", price))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn upload_draft_wire_shape() {
        let draft = ProductDraft::for_upload("cat.mp4", 500.0);
        let body = serde_json::to_value(ProductEnvelope { product: &draft }).unwrap();

        assert_eq!(
            body,
            json!({
                "product": {
                    "title": "API Test Product - cat.mp4",
                    "body_html": "<strong>This is a test product created via API call.</strong>",
                    "vendor": "API Test",
                    "product_type": "Digital Goods",
                    "status": "draft",
                    "tags": "test, api, video",
                    "variants": [{ "price": "500.00" }]
                }
            })
        );
    }

    #[test]
    fn fractional_price_keeps_decimals() {
        let draft = ProductDraft::for_upload("a.mov", 19.99);
        let body = serde_json::to_value(&draft).unwrap();
        assert_eq!(body["variants"][0]["price"], "19.99");
    }

    #[test]
    fn product_tolerates_extra_fields() {
        let product: Product = serde_json::from_value(json!({
            "id": 632910392,
            "title": "API Test Product - cat.mp4",
            "status": "draft",
            "vendor": "API Test",
            "variants": []
        }))
        .unwrap();
        assert_eq!(product.id, 632910392);
        assert_eq!(product.status, Some(ProductStatus::Draft));
        assert_eq!(product.handle, None);
    }
}
