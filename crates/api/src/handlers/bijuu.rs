//! Handlers for the `/api/naruto/bijuus` resource.

use axum::extract::{Path, State};
use axum::Json;
use narutodex_core::error::CoreError;
use narutodex_core::types::DbId;
use narutodex_db::models::bijuu::Bijuu;
use narutodex_db::repositories::BijuuRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/naruto/bijuus
///
/// Tailed beasts are returned ordered by tail count.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Bijuu>>> {
    let bijuus = BijuuRepo::list(&state.pool).await?;
    Ok(Json(bijuus))
}

/// GET /api/naruto/bijuus/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Bijuu>> {
    let bijuu = BijuuRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Bijuu",
            id,
        }))?;
    Ok(Json(bijuu))
}
