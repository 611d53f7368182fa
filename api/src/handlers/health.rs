//! Health check handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::adapters::media::{FfmpegStatus, WatermarkStatus};
use crate::domain::ports::{SecretStore, ShopifyClient};
use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    port: u16,
    secret_source: &'static str,
    processed_bucket: String,
    ffmpeg: FfmpegStatus,
    watermark: WatermarkStatus,
}

/// GET /health
pub async fn health<S, C>(State(state): State<AppState<S, C>>) -> Json<HealthResponse>
where
    S: SecretStore + 'static,
    C: ShopifyClient + 'static,
{
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        port: state.config.port,
        secret_source: state.secret_source,
        processed_bucket: state.config.processed_bucket.clone(),
        ffmpeg: state.toolchain.ffmpeg.clone(),
        watermark: state.toolchain.watermark.clone(),
    })
}
