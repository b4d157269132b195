//! Health endpoint: reports the running configuration without calling upstream.

use axum::Json;
use axum::extract::State;

use crate::AppState;
use crate::models::HealthResponse;

/// `GET /api/health`: liveness plus the active variant and model.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: coach_core::version(),
        variant: state.settings.variant.as_str(),
        model: state.settings.model.clone(),
    })
}
