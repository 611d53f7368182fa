//! douga API Server
//!
//! Receives storage upload notifications and lists each uploaded video as a
//! draft product in the Shopify store.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod auth;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{
    MediaToolchain, SecretManagerStore, SecretSource, ShopifyClientImpl, StaticSecretStore,
    DEFAULT_METADATA_URL, DEFAULT_REQUEST_TIMEOUT, DEFAULT_SECRET_MANAGER_URL,
};
use app::UploadService;
use config::Config;
use domain::ports::{SecretStore, ShopifyClient};

/// Application state shared across all handlers
pub struct AppState<S, C>
where
    S: SecretStore,
    C: ShopifyClient,
{
    pub upload_service: Arc<UploadService<S, C>>,
    pub toolchain: Arc<MediaToolchain>,
    pub secret_source: &'static str,
    pub config: Config,
}

impl<S, C> Clone for AppState<S, C>
where
    S: SecretStore,
    C: ShopifyClient,
{
    fn clone(&self) -> Self {
        Self {
            upload_service: self.upload_service.clone(),
            toolchain: self.toolchain.clone(),
            secret_source: self.secret_source,
            config: self.config.clone(),
        }
    }
}

/// Build the HTTP router
///
/// No timeout layer: a request runs until the upstream calls finish.
pub fn build_router<S, C>(state: AppState<S, C>) -> Router
where
    S: SecretStore + 'static,
    C: ShopifyClient + 'static,
{
    let ingress_routes = Router::new()
        .route("/process", post(handlers::process_upload::<S, C>))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::ingress_middleware::<S, C>,
        ));

    Router::new()
        // Health check (no auth)
        .route("/health", get(handlers::health::<S, C>))
        .merge(ingress_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,douga_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.worker_threads)
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?;

    runtime.block_on(serve(config))
}

async fn serve(config: Config) -> anyhow::Result<()> {
    tracing::info!(
        worker_threads = config.worker_threads,
        project = %config.project_id,
        originals_bucket = %config.originals_bucket,
        "Starting douga API..."
    );

    if config.shop_domain.is_none() {
        tracing::warn!("SHOPIFY_SHOP_DOMAIN is not set; /process will fail until it is");
    }

    // Create adapters
    let secrets = Arc::new(match &config.shopify_access_token {
        Some(token) => SecretSource::Static(StaticSecretStore::new(token.clone())),
        None => SecretSource::SecretManager(
            SecretManagerStore::new(
                config.project_id.clone(),
                DEFAULT_SECRET_MANAGER_URL.to_string(),
                DEFAULT_METADATA_URL.to_string(),
                DEFAULT_REQUEST_TIMEOUT,
            )
            .context("Failed to build Secret Manager client")?,
        ),
    });
    let secret_source = secrets.kind();
    tracing::info!(source = secret_source, "Shopify token source selected");

    let shopify = Arc::new(
        ShopifyClientImpl::new(config.shopify_api_version.clone())
            .context("Failed to build Shopify client")?,
    );

    let toolchain = Arc::new(
        MediaToolchain::probe(&config.ffmpeg_bin, Path::new(&config.watermark_file)).await,
    );

    // Create application services
    let upload_service = Arc::new(UploadService::new(secrets, shopify, &config));

    let state = AppState {
        upload_service,
        toolchain,
        secret_source,
        config: config.clone(),
    };

    let app = build_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
