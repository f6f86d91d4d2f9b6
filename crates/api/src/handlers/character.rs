//! Handlers for the `/api/personagens` resource (character CRUD + search).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use narutodex_core::error::CoreError;
use narutodex_core::types::DbId;
use narutodex_db::models::character::{
    Character, CharacterDetail, CharacterFilters, CreateCharacter, UpdateCharacter,
};
use narutodex_db::repositories::CharacterRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// Raw query parameters for `GET /api/personagens`.
///
/// Everything arrives as a string so malformed values produce a 400 in the
/// standard error shape instead of the extractor's plain-text rejection.
#[derive(Debug, Default, Deserialize)]
pub struct CharacterListParams {
    pub q: Option<String>,
    pub village_id: Option<String>,
    pub clan_id: Option<String>,
    pub rank_id: Option<String>,
    pub team_id: Option<String>,
    /// Only the exact string `"true"` enables the filter with value true;
    /// any other value filters on false.
    pub alive: Option<String>,
    /// Same convention as `alive`.
    pub active: Option<String>,
    /// Comma-separated element ids, e.g. `elements=1,3`.
    pub elements: Option<String>,
}

impl CharacterListParams {
    /// Parse the raw string parameters into typed filters.
    fn into_filters(self) -> Result<CharacterFilters, AppError> {
        Ok(CharacterFilters {
            q: self.q.filter(|s| !s.trim().is_empty()),
            village_id: parse_id_param("village_id", self.village_id)?,
            clan_id: parse_id_param("clan_id", self.clan_id)?,
            rank_id: parse_id_param("rank_id", self.rank_id)?,
            team_id: parse_id_param("team_id", self.team_id)?,
            alive: self.alive.map(|s| s == "true"),
            active: self.active.map(|s| s == "true"),
            elements: parse_elements_param(self.elements)?,
        })
    }
}

/// Parse an optional numeric filter, rejecting malformed values with a 400.
fn parse_id_param(name: &str, value: Option<String>) -> Result<Option<DbId>, AppError> {
    match value {
        None => Ok(None),
        Some(raw) => raw.parse::<DbId>().map(Some).map_err(|_| {
            AppError::BadRequest(format!("Query parameter '{name}' must be an integer"))
        }),
    }
}

/// Parse the comma-separated `elements` parameter into a list of ids.
fn parse_elements_param(value: Option<String>) -> Result<Option<Vec<DbId>>, AppError> {
    let Some(raw) = value else { return Ok(None) };

    let ids: Result<Vec<DbId>, _> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse::<DbId>)
        .collect();

    match ids {
        Ok(ids) if ids.is_empty() => Ok(None),
        Ok(ids) => Ok(Some(ids)),
        Err(_) => Err(AppError::BadRequest(
            "Query parameter 'elements' must be a comma-separated list of integers".into(),
        )),
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/personagens
///
/// List characters matching the given filters, ordered by name.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<CharacterListParams>,
) -> AppResult<Json<Vec<CharacterDetail>>> {
    let filters = params.into_filters()?;
    let characters = CharacterRepo::list(&state.pool, &filters).await?;
    Ok(Json(characters))
}

/// GET /api/personagens/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CharacterDetail>> {
    let character = CharacterRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id,
        }))?;
    Ok(Json(character))
}

/// POST /api/personagens (requires auth)
///
/// Create a character. `name`, `village_id`, `clan_id`, and `rank_id` are
/// required; missing values are rejected before any insert is attempted.
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CreateCharacter>,
) -> AppResult<(StatusCode, Json<Character>)> {
    validate_required(&input)?;

    let character = CharacterRepo::create(&state.pool, &input).await?;

    tracing::info!(
        character_id = character.id,
        user_id = auth_user.user_id,
        "character created"
    );

    Ok((StatusCode::CREATED, Json(character)))
}

/// PUT /api/personagens/{id} (requires auth)
///
/// Merge-update: omitted fields keep their stored values.
pub async fn update(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCharacter>,
) -> AppResult<Json<Character>> {
    let character = CharacterRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id,
        }))?;

    tracing::info!(
        character_id = character.id,
        user_id = auth_user.user_id,
        "character updated"
    );

    Ok(Json(character))
}

/// DELETE /api/personagens/{id} (requires auth)
///
/// Returns 204 on success, 404 if the character does not exist.
pub async fn delete(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CharacterRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id,
        }));
    }

    tracing::info!(
        character_id = id,
        user_id = auth_user.user_id,
        "character deleted"
    );

    Ok(StatusCode::NO_CONTENT)
}

/// Reject creation payloads missing any of the required fields.
fn validate_required(input: &CreateCharacter) -> Result<(), AppError> {
    if input.name.as_deref().map_or(true, |s| s.trim().is_empty()) {
        return Err(AppError::BadRequest("Field 'name' is required".into()));
    }
    if input.village_id.is_none() {
        return Err(AppError::BadRequest("Field 'village_id' is required".into()));
    }
    if input.clan_id.is_none() {
        return Err(AppError::BadRequest("Field 'clan_id' is required".into()));
    }
    if input.rank_id.is_none() {
        return Err(AppError::BadRequest("Field 'rank_id' is required".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn test_boolean_params_compare_against_literal_true() {
        let params = CharacterListParams {
            alive: Some("true".into()),
            active: Some("yes".into()),
            ..Default::default()
        };
        let filters = params.into_filters().unwrap();
        assert_eq!(filters.alive, Some(true));
        // Any string other than "true" means false, not an error.
        assert_eq!(filters.active, Some(false));
    }

    #[test]
    fn test_elements_param_parses_comma_separated_ids() {
        let filters = CharacterListParams {
            elements: Some("1, 3,5".into()),
            ..Default::default()
        }
        .into_filters()
        .unwrap();
        assert_eq!(filters.elements, Some(vec![1, 3, 5]));
    }

    #[test]
    fn test_malformed_numeric_params_are_rejected() {
        let result = CharacterListParams {
            village_id: Some("abc".into()),
            ..Default::default()
        }
        .into_filters();
        assert_matches!(result, Err(AppError::BadRequest(_)));

        let result = CharacterListParams {
            elements: Some("1,x".into()),
            ..Default::default()
        }
        .into_filters();
        assert_matches!(result, Err(AppError::BadRequest(_)));
    }

    #[test]
    fn test_blank_q_is_dropped() {
        let filters = CharacterListParams {
            q: Some("   ".into()),
            ..Default::default()
        }
        .into_filters()
        .unwrap();
        assert_eq!(filters.q, None);
    }
}
