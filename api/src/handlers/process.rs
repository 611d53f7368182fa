//! Upload notification handler

use axum::{body::Bytes, extract::State, http::StatusCode};
use tracing::{Instrument, Span};
use uuid::Uuid;

use crate::domain::entities::StorageObjectEvent;
use crate::domain::ports::{SecretStore, ShopifyClient};
use crate::error::AppError;
use crate::AppState;

/// POST /process
///
/// Accepts a storage "object finalized" notification and creates a draft
/// product for the uploaded file. Answers 400 for a malformed payload and
/// 500 when any downstream step fails.
pub async fn process_upload<S, C>(
    State(state): State<AppState<S, C>>,
    body: Bytes,
) -> Result<(StatusCode, &'static str), AppError>
where
    S: SecretStore + 'static,
    C: ShopifyClient + 'static,
{
    let span = tracing::info_span!(
        "process_upload",
        request_id = %Uuid::new_v4(),
        file = tracing::field::Empty
    );

    async move {
        let event: StorageObjectEvent = serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!(error = %e, "Failed to parse upload event");
            AppError::BadRequest(format!("Invalid event payload: {}", e))
        })?;
        Span::current().record("file", tracing::field::display(event.uri()));

        tracing::info!(content_type = ?event.content_type, "Processing upload");
        state.upload_service.process_upload(&event).await?;
        tracing::info!("All processing completed");
        Ok::<_, AppError>((StatusCode::OK, "OK"))
    }
    .instrument(span)
    .await
}
