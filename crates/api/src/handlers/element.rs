//! Handlers for the `/api/naruto/elements` resource.

use axum::extract::{Path, State};
use axum::Json;
use narutodex_core::error::CoreError;
use narutodex_core::types::DbId;
use narutodex_db::models::element::Element;
use narutodex_db::repositories::ElementRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/naruto/elements
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Element>>> {
    let elements = ElementRepo::list(&state.pool).await?;
    Ok(Json(elements))
}

/// GET /api/naruto/elements/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Element>> {
    let element = ElementRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Element",
            id,
        }))?;
    Ok(Json(element))
}
