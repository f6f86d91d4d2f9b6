//! Handlers for the `/api/naruto/ranks` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use narutodex_core::error::CoreError;
use narutodex_core::types::DbId;
use narutodex_db::models::autocomplete::RankSuggestion;
use narutodex_db::models::rank::Rank;
use narutodex_db::repositories::RankRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::AutocompleteParams;
use crate::state::AppState;

/// GET /api/naruto/ranks
///
/// Ranks are returned ordered by level ascending, not by name.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Rank>>> {
    let ranks = RankRepo::list(&state.pool).await?;
    Ok(Json(ranks))
}

/// GET /api/naruto/ranks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Rank>> {
    let rank = RankRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Rank", id }))?;
    Ok(Json(rank))
}

/// GET /api/naruto/ranks/autocomplete?q=
pub async fn autocomplete(
    State(state): State<AppState>,
    Query(params): Query<AutocompleteParams>,
) -> AppResult<Json<Vec<RankSuggestion>>> {
    let suggestions = RankRepo::autocomplete(&state.pool, params.q.as_deref()).await?;
    Ok(Json(suggestions))
}
