//! Repository for the `clans` table.

use narutodex_core::text;
use narutodex_core::types::DbId;
use sqlx::PgPool;

use crate::models::autocomplete::NameSuggestion;
use crate::models::clan::Clan;
use crate::repositories::AUTOCOMPLETE_LIMIT;

/// Provides read access to clans.
pub struct ClanRepo;

impl ClanRepo {
    /// List all clans ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Clan>, sqlx::Error> {
        sqlx::query_as::<_, Clan>("SELECT * FROM clans ORDER BY name")
            .fetch_all(pool)
            .await
    }

    /// Find a clan by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Clan>, sqlx::Error> {
        sqlx::query_as::<_, Clan>("SELECT * FROM clans WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Top clan name suggestions: frequency first, then alphabetical.
    pub async fn autocomplete(
        pool: &PgPool,
        term: Option<&str>,
    ) -> Result<Vec<NameSuggestion>, sqlx::Error> {
        let pattern = term.map(text::contains_pattern);
        let folded = text::folded_column("name");
        let query = format!(
            "SELECT name, COUNT(*) AS count \
             FROM clans \
             WHERE name IS NOT NULL AND ($1::TEXT IS NULL OR {folded} LIKE $1) \
             GROUP BY name \
             HAVING COUNT(*) > 0 \
             ORDER BY count DESC, name \
             LIMIT $2"
        );
        sqlx::query_as::<_, NameSuggestion>(&query)
            .bind(pattern)
            .bind(AUTOCOMPLETE_LIMIT)
            .fetch_all(pool)
            .await
    }
}
