//! Ingress token middleware
//!
//! When `INGRESS_TOKEN` is configured, `/process` only accepts requests
//! carrying it as a bearer token. Without it every request is let through
//! (the platform is expected to authenticate the caller).

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};
use sha2::{Digest, Sha256};

use crate::domain::ports::{SecretStore, ShopifyClient};
use crate::error::AppError;
use crate::AppState;

/// Hash a token for comparison
fn hash_token(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}

/// Extract the bearer token from the Authorization header
fn extract_bearer(request: &Request<Body>) -> Option<&str> {
    request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
}

pub async fn ingress_middleware<S, C>(
    State(state): State<AppState<S, C>>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError>
where
    S: SecretStore + 'static,
    C: ShopifyClient + 'static,
{
    if let Some(expected) = &state.config.ingress_token {
        let provided = extract_bearer(&request).ok_or_else(|| {
            tracing::warn!("Missing bearer token on ingress");
            AppError::Unauthorized
        })?;

        // Compare digests, not raw tokens
        if hash_token(provided) != hash_token(expected) {
            tracing::warn!("Invalid bearer token on ingress");
            return Err(AppError::Unauthorized);
        }
    }

    Ok(next.run(request).await)
}
