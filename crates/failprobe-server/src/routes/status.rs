use axum::extract::State;
use axum::Json;

use crate::state::AppState;

/// GET /api/status — whether any request is currently in flight.
pub async fn get_status(State(app): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "sending": app.tracker.is_sending(),
        "in_flight": app.tracker.in_flight(),
    }))
}

/// GET /api/config — the active runtime configuration.
pub async fn get_config(State(app): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!(app.config))
}
