//! Handlers for the `/api/naruto/teams` resource.

use axum::extract::{Path, State};
use axum::Json;
use narutodex_core::error::CoreError;
use narutodex_core::types::DbId;
use narutodex_db::models::team::Team;
use narutodex_db::repositories::TeamRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/naruto/teams
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Team>>> {
    let teams = TeamRepo::list(&state.pool).await?;
    Ok(Json(teams))
}

/// GET /api/naruto/teams/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Team>> {
    let team = TeamRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Team", id }))?;
    Ok(Json(team))
}
