use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::services::SubmissionError;
use crate::presentation::state::AppState;

use super::ErrorResponse;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitJobRequest {
    #[serde(default)]
    pub paper_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitJobResponse {
    pub job_id: String,
    pub status: String,
    pub message: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn submit_job_handler(
    State(state): State<AppState>,
    Json(request): Json<SubmitJobRequest>,
) -> impl IntoResponse {
    match state
        .submission
        .submit(request.paper_url, request.api_key)
        .await
    {
        Ok(job_id) => (
            StatusCode::ACCEPTED,
            Json(SubmitJobResponse {
                job_id: job_id.to_string(),
                status: "pending".to_string(),
                message: "Quiz generation started".to_string(),
            }),
        )
            .into_response(),
        Err(e @ (SubmissionError::MissingPaperUrl | SubmissionError::MissingCredential)) => {
            tracing::warn!(error = %e, "Rejected job submission");
            (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(e.to_string()))).into_response()
        }
        Err(SubmissionError::Store(e)) => {
            tracing::error!(error = %e, "Failed to create job record");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to create job")),
            )
                .into_response()
        }
    }
}
