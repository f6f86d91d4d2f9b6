use axum::routing::get;
use axum::Router;

use crate::handlers::character;
use crate::state::AppState;

/// Mount `/api/personagens` routes.
///
/// Reads are public; create, update, and delete require a bearer token via
/// the `AuthUser` extractor on the handlers themselves.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(character::list).post(character::create))
        .route(
            "/{id}",
            get(character::get_by_id)
                .put(character::update)
                .delete(character::delete),
        )
}
