use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::JobMessage;
use crate::application::services::{ProcessOutcome, ProcessingError};
use crate::infrastructure::queue::SIGNATURE_HEADER;
use crate::presentation::state::AppState;

use super::ErrorResponse;

#[derive(Serialize)]
pub struct WebhookResponse {
    pub message: String,
}

/// Queue-facing worker endpoint. The signature covers the raw body, so the
/// body is taken as bytes and only parsed once verification passes.
///
/// Responses drive the queue's retry policy: 2xx acknowledges the delivery
/// (including the already-processed case), 4xx drops it, 5xx asks for a
/// retry.
#[tracing::instrument(skip(state, headers, body))]
pub async fn process_webhook_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let signature = match headers.get(SIGNATURE_HEADER).and_then(|v| v.to_str().ok()) {
        Some(s) => s,
        None => {
            tracing::warn!("Webhook delivery without signature header");
            return (
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse::new("Missing signature")),
            )
                .into_response();
        }
    };

    if let Err(e) = state.verifier.verify(signature, &body) {
        tracing::warn!(error = %e, "Webhook signature rejected");
        return (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::new("Invalid signature")),
        )
            .into_response();
    }

    let message: JobMessage = match serde_json::from_slice(&body) {
        Ok(m) => m,
        Err(e) => {
            tracing::warn!(error = %e, "Malformed webhook payload");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("Invalid payload")),
            )
                .into_response();
        }
    };
    if message.paper_url.is_empty() || message.api_key.is_empty() {
        tracing::warn!(job_id = %message.job_id, "Webhook payload missing fields");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Invalid payload")),
        )
            .into_response();
    }

    match state.processing.process(&message).await {
        Ok(ProcessOutcome::Completed) => (
            StatusCode::OK,
            Json(WebhookResponse {
                message: format!("Job {} processed successfully", message.job_id),
            }),
        )
            .into_response(),
        Ok(ProcessOutcome::AlreadyProcessed) => (
            StatusCode::OK,
            Json(WebhookResponse {
                message: "Job already processed".to_string(),
            }),
        )
            .into_response(),
        Err(e @ ProcessingError::FailureNotRecorded { .. }) => {
            tracing::error!(job_id = %message.job_id, error = %e, "Webhook processing failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(format!(
                    "Failed to process job {}",
                    message.job_id
                ))),
            )
                .into_response()
        }
        Err(e) => {
            tracing::warn!(job_id = %message.job_id, error = %e, "Webhook processing failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(format!(
                    "Failed to process job {}",
                    message.job_id
                ))),
            )
                .into_response()
        }
    }
}
