use std::env;
use std::str::FromStr;

use crate::error::ConfigError;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_WORKER_THREADS: usize = 8;
const DEFAULT_PRODUCT_PRICE: f64 = 500.0;

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    /// Tokio worker threads serving requests
    pub worker_threads: usize,
    pub project_id: String,
    /// Bucket that upload notifications are expected to come from
    pub originals_bucket: String,
    /// Bucket for processed media, reported on /health
    pub processed_bucket: String,
    /// Shop domain as configured; normalized when the client is built
    pub shop_domain: Option<String>,
    pub shopify_api_version: String,
    /// Secret Manager secret id holding the Admin API token
    pub shopify_token_secret: String,
    /// Static Admin API token, bypasses Secret Manager when set
    pub shopify_access_token: Option<String>,
    pub default_product_price: f64,
    pub watermark_file: String,
    pub ffmpeg_bin: String,
    /// Bearer token required on /process when set
    pub ingress_token: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from any variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Vars(lookup);

        let worker_threads = vars.parse("WORKER_THREADS", DEFAULT_WORKER_THREADS)?;
        if worker_threads == 0 {
            return Err(ConfigError::Invalid {
                var: "WORKER_THREADS",
                reason: "must be at least 1".to_string(),
            });
        }

        let default_product_price = vars.parse("DEFAULT_PRODUCT_PRICE", DEFAULT_PRODUCT_PRICE)?;
        if !default_product_price.is_finite() || default_product_price < 0.0 {
            return Err(ConfigError::Invalid {
                var: "DEFAULT_PRODUCT_PRICE",
                reason: format!("{} is not a valid price", default_product_price),
            });
        }

        Ok(Self {
            port: vars.parse("PORT", DEFAULT_PORT)?,
            worker_threads,
            project_id: vars.or("GOOGLE_CLOUD_PROJECT", "douga-auto-system"),
            originals_bucket: vars.or("ORIGINALS_BUCKET", "douga-auto-system-originals"),
            processed_bucket: vars.or("PROCESSED_BUCKET", "douga-auto-system-processed"),
            shop_domain: vars.non_empty("SHOPIFY_SHOP_DOMAIN"),
            shopify_api_version: vars.or("SHOPIFY_API_VERSION", "2024-04"),
            shopify_token_secret: vars.or("SHOPIFY_TOKEN_SECRET", "shopify-admin-api-token"),
            shopify_access_token: vars.non_empty("SHOPIFY_ACCESS_TOKEN"),
            default_product_price,
            watermark_file: vars.or("WATERMARK_FILE", "watermark.png"),
            ffmpeg_bin: vars.or("FFMPEG_BIN", "ffmpeg"),
            ingress_token: vars.non_empty("INGRESS_TOKEN"),
        })
    }
}

/// Variable source with trimming and typed parsing
struct Vars<F>(F);

impl<F> Vars<F>
where
    F: Fn(&str) -> Option<String>,
{
    /// Blank values count as unset
    fn non_empty(&self, name: &str) -> Option<String> {
        (self.0)(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn or(&self, name: &str, default: &str) -> String {
        self.non_empty(name).unwrap_or_else(|| default.to_string())
    }

    fn parse<T>(&self, name: &'static str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.non_empty(name) {
            None => Ok(default),
            Some(raw) => raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
                var: name,
                reason: format!("{:?}: {}", raw, e),
            }),
        }
    }
}
