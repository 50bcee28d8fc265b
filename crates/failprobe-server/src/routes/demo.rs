use axum::http::StatusCode;
use std::time::Duration;

// ---------------------------------------------------------------------------
// Demo failure endpoints
// ---------------------------------------------------------------------------
//
// These back the two catalog scenarios that need a cooperating server; the
// rest of the catalog targets hosts that never answer at all.

/// GET /api/ok — a plain success, for contrast.
pub async fn ok() -> &'static str {
    "ok"
}

/// GET /api/server-response-http500 — always fails with a 500.
pub async fn http500() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "simulated server failure")
}

/// GET /api/server-response-timed-out — holds the response far past any
/// sane client timeout, so the client's deadline always fires first.
pub async fn timed_out() -> &'static str {
    tokio::time::sleep(Duration::from_secs(600)).await;
    "you waited this long?"
}
