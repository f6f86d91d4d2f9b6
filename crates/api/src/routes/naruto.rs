use axum::routing::get;
use axum::Router;

use crate::handlers::{bijuu, clan, element, jutsu, rank, stats, team, village};
use crate::state::AppState;

/// Mount the `/api/naruto` reference-data routes.
///
/// `autocomplete` is a literal segment, so it wins over the `{id}` capture.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/villages", get(village::list))
        .route("/villages/autocomplete", get(village::autocomplete))
        .route("/villages/{id}", get(village::get_by_id))
        .route("/clans", get(clan::list))
        .route("/clans/autocomplete", get(clan::autocomplete))
        .route("/clans/{id}", get(clan::get_by_id))
        .route("/ranks", get(rank::list))
        .route("/ranks/autocomplete", get(rank::autocomplete))
        .route("/ranks/{id}", get(rank::get_by_id))
        .route("/elements", get(element::list))
        .route("/elements/{id}", get(element::get_by_id))
        .route("/teams", get(team::list))
        .route("/teams/{id}", get(team::get_by_id))
        .route("/bijuus", get(bijuu::list))
        .route("/bijuus/{id}", get(bijuu::get_by_id))
        .route("/jutsus", get(jutsu::list))
        .route("/jutsus/{id}", get(jutsu::get_by_id))
        .route("/stats", get(stats::get))
}
