//! Shopify shop domain

use std::fmt;

use crate::error::DomainError;

/// Bare shop host, e.g. `example.myshopify.com`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopDomain(String);

impl ShopDomain {
    /// Accepts a host or a URL; the scheme and any path are dropped.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        let without_scheme = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"))
            .unwrap_or(trimmed);
        let host = without_scheme.split('/').next().unwrap_or_default();

        if host.is_empty() {
            return Err(DomainError::Validation(
                "Shopify domain is not set. Please check SHOPIFY_SHOP_DOMAIN environment variable."
                    .to_string(),
            ));
        }

        Ok(Self(host.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShopDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_scheme_and_path() {
        let domain = ShopDomain::parse("https://example.myshopify.com/admin/products").unwrap();
        assert_eq!(domain.as_str(), "example.myshopify.com");

        let domain = ShopDomain::parse("http://example.myshopify.com").unwrap();
        assert_eq!(domain.as_str(), "example.myshopify.com");
    }

    #[test]
    fn bare_host_is_kept() {
        let domain = ShopDomain::parse(" example.myshopify.com ").unwrap();
        assert_eq!(domain.to_string(), "example.myshopify.com");
    }

    #[test]
    fn empty_is_rejected() {
        assert!(ShopDomain::parse("").is_err());
        assert!(ShopDomain::parse("https://").is_err());
        assert!(ShopDomain::parse("/admin").is_err());
    }
}
