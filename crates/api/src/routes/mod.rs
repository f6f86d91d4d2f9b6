pub mod auth;
pub mod character;
pub mod health;
pub mod naruto;

use axum::Router;

use crate::state::AppState;

/// Build the full API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                                  liveness + database check
///
/// /auth/register                           register (public)
/// /auth/login                              login (public)
/// /auth/me                                 current user (requires auth)
///
/// /api/naruto/villages                     list
/// /api/naruto/villages/autocomplete        name suggestions
/// /api/naruto/villages/{id}                detail with member characters
/// /api/naruto/clans                        list
/// /api/naruto/clans/autocomplete           name suggestions
/// /api/naruto/clans/{id}                   get
/// /api/naruto/ranks                        list (by level)
/// /api/naruto/ranks/autocomplete           name suggestions (level first)
/// /api/naruto/ranks/{id}                   get
/// /api/naruto/elements                     list
/// /api/naruto/elements/{id}                get
/// /api/naruto/teams                        list (with village names)
/// /api/naruto/teams/{id}                   get
/// /api/naruto/bijuus                       list (by tail count)
/// /api/naruto/bijuus/{id}                  get
/// /api/naruto/jutsus                       list
/// /api/naruto/jutsus/{id}                  get
/// /api/naruto/stats                        aggregate counts
///
/// /api/personagens                         list with filters (public), create (auth)
/// /api/personagens/{id}                    get (public), update + delete (auth)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/auth", auth::router())
        .nest("/api/naruto", naruto::router())
        .nest("/api/personagens", character::router())
}
