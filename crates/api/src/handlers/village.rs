//! Handlers for the `/api/naruto/villages` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use narutodex_core::error::CoreError;
use narutodex_core::types::DbId;
use narutodex_db::models::autocomplete::NameSuggestion;
use narutodex_db::models::village::{Village, VillageDetail};
use narutodex_db::repositories::VillageRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::AutocompleteParams;
use crate::state::AppState;

/// GET /api/naruto/villages
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Village>>> {
    let villages = VillageRepo::list(&state.pool).await?;
    Ok(Json(villages))
}

/// GET /api/naruto/villages/{id}
///
/// Returns the village with its member characters aggregated as a JSON array.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<VillageDetail>> {
    let village = VillageRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Village",
            id,
        }))?;
    Ok(Json(village))
}

/// GET /api/naruto/villages/autocomplete?q=
pub async fn autocomplete(
    State(state): State<AppState>,
    Query(params): Query<AutocompleteParams>,
) -> AppResult<Json<Vec<NameSuggestion>>> {
    let suggestions = VillageRepo::autocomplete(&state.pool, params.q.as_deref()).await?;
    Ok(Json(suggestions))
}
