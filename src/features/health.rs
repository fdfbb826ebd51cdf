use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::AppState;

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    pub timestamp: DateTime<Utc>,
    pub uptime: u64,
}

// GET /health - issues a trivial query against the store to confirm liveness
pub async fn health_handler(State(state): State<AppState>) -> Response {
    match state.repo.ping().await {
        Ok(()) => Json(HealthResponse {
            status: "OK".to_string(),
            database: "Connected".to_string(),
            timestamp: Utc::now(),
            uptime: state.started_at.elapsed().as_secs(),
        })
        .into_response(),

        Err(err) => {
            tracing::error!(?err, "health check failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "status": "ERROR", "database": "Disconnected" })),
            )
                .into_response()
        }
    }
}
