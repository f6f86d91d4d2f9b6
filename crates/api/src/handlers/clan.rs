//! Handlers for the `/api/naruto/clans` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use narutodex_core::error::CoreError;
use narutodex_core::types::DbId;
use narutodex_db::models::autocomplete::NameSuggestion;
use narutodex_db::models::clan::Clan;
use narutodex_db::repositories::ClanRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::AutocompleteParams;
use crate::state::AppState;

/// GET /api/naruto/clans
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Clan>>> {
    let clans = ClanRepo::list(&state.pool).await?;
    Ok(Json(clans))
}

/// GET /api/naruto/clans/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Clan>> {
    let clan = ClanRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Clan", id }))?;
    Ok(Json(clan))
}

/// GET /api/naruto/clans/autocomplete?q=
pub async fn autocomplete(
    State(state): State<AppState>,
    Query(params): Query<AutocompleteParams>,
) -> AppResult<Json<Vec<NameSuggestion>>> {
    let suggestions = ClanRepo::autocomplete(&state.pool, params.q.as_deref()).await?;
    Ok(Json(suggestions))
}
