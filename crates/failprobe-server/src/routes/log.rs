use axum::extract::State;
use axum::Json;

use crate::state::AppState;

/// GET /api/log — current log contents, oldest first.
pub async fn get_log(State(app): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "capacity": app.log.capacity(),
        "lines": app.log.lines(),
    }))
}

/// POST /api/log/clear — empty the log.
pub async fn clear_log(State(app): State<AppState>) -> Json<serde_json::Value> {
    app.log.clear();
    Json(serde_json::json!({ "cleared": true }))
}
