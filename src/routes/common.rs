//! Common routes: health, version, and the hello-world greeting.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

async fn ready(
    State(state): State<AppState>,
) -> Result<Json<HealthBody>, (StatusCode, Json<HealthBody>)> {
    if state.store.ping().await.is_err() {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthBody { status: "degraded" }),
        ));
    }
    Ok(Json(HealthBody { status: "ok" }))
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn hello() -> &'static str {
    "Hello World!"
}

/// GET /health, /ready, /version, and /api/helloworld.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .route("/api/helloworld", get(hello))
        .with_state(state)
}
