//! Status routes: liveness, readiness against the store, and build info.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Serialize)]
struct Readiness {
    status: &'static str,
    database: &'static str,
    backend: &'static str,
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// 200 when `SELECT 1` succeeds on the pool, 503 otherwise. Either way the body names the backend.
async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Readiness>) {
    let (code, status, database) = match sqlx::query("SELECT 1").fetch_optional(&state.pool).await {
        Ok(_) => (StatusCode::OK, "ok", "ok"),
        Err(e) => {
            tracing::warn!(error = %e, backend = state.backend.name(), "readiness check failed");
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unavailable")
        }
    };
    (
        code,
        Json(Readiness {
            status,
            database,
            backend: state.backend.name(),
        }),
    )
}

async fn version() -> Json<Value> {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn info(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "description": env!("CARGO_PKG_DESCRIPTION"),
        "backend": state.backend.name()
    }))
}

/// GET /health, /ready, /version and /info.
pub fn status_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .route("/info", get(info))
        .with_state(state)
}
