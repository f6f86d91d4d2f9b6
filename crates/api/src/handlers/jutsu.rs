//! Handlers for the `/api/naruto/jutsus` resource.

use axum::extract::{Path, State};
use axum::Json;
use narutodex_core::error::CoreError;
use narutodex_core::types::DbId;
use narutodex_db::models::jutsu::Jutsu;
use narutodex_db::repositories::JutsuRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/naruto/jutsus
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Jutsu>>> {
    let jutsus = JutsuRepo::list(&state.pool).await?;
    Ok(Json(jutsus))
}

/// GET /api/naruto/jutsus/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Jutsu>> {
    let jutsu = JutsuRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Jutsu",
            id,
        }))?;
    Ok(Json(jutsu))
}
