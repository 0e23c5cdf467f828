use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;

use crate::presentation::state::AppState;

use super::ErrorResponse;

/// Internal endpoint that re-runs jobs stuck in `pending`, typically hit on
/// a schedule. Guarded by a bearer secret when one is configured.
#[tracing::instrument(skip(state, headers))]
pub async fn sweep_handler(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    if let Some(secret) = &state.sweep_secret {
        let authorized = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == format!("Bearer {}", secret));
        if !authorized {
            tracing::warn!("Unauthorized sweep attempt");
            return (
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse::new("Unauthorized")),
            )
                .into_response();
        }
    }

    match state.sweep.run().await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Sweep failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Sweep failed")),
            )
                .into_response()
        }
    }
}
