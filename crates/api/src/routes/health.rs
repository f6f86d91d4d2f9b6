use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde_json::json;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /health -- liveness probe that also pings the database.
///
/// A database failure propagates as a 500 in the standard error shape.
async fn health_check(State(state): State<AppState>) -> AppResult<Json<serde_json::Value>> {
    narutodex_db::health_check(&state.pool).await?;
    Ok(Json(json!({ "ok": true })))
}

/// Mount the health check route (root-level, not under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
