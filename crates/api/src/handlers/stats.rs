//! Handler for the `/api/naruto/stats` aggregate view.

use axum::extract::State;
use axum::Json;
use narutodex_db::models::stats::Stats;
use narutodex_db::repositories::StatsRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/naruto/stats
pub async fn get(State(state): State<AppState>) -> AppResult<Json<Stats>> {
    let stats = StatsRepo::collect(&state.pool).await?;
    Ok(Json(stats))
}
