use axum::extract::{Path, State};
use axum::Json;

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/actions — the scenario catalog, in declaration order.
pub async fn list_actions(State(app): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!(app.catalog.actions()))
}

/// POST /api/actions/{label}/run — start a probe for the named scenario.
///
/// The probe runs as a background task; this returns as soon as it is
/// dispatched. Firing a second scenario while one is in flight is allowed;
/// their lifecycle lines interleave in the log.
pub async fn run_action(
    State(app): State<AppState>,
    Path(label): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let action = app
        .catalog
        .find(&label)
        .ok_or_else(|| AppError::not_found(format!("no such action: '{label}'")))?
        .clone();

    tracing::info!(label = %action.label, url = %action.url, "running scenario");

    let catalog = app.catalog.clone();
    let prober = app.prober.clone();
    tokio::spawn(async move {
        catalog.invoke(&prober, &action).await;
    });

    Ok(Json(serde_json::json!({ "started": true, "label": label })))
}
