//! Repository for the `ranks` table.

use narutodex_core::text;
use narutodex_core::types::DbId;
use sqlx::PgPool;

use crate::models::autocomplete::RankSuggestion;
use crate::models::rank::Rank;
use crate::repositories::AUTOCOMPLETE_LIMIT;

/// Provides read access to ranks.
pub struct RankRepo;

impl RankRepo {
    /// List all ranks ordered by level ascending, independent of insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Rank>, sqlx::Error> {
        sqlx::query_as::<_, Rank>("SELECT * FROM ranks ORDER BY level ASC")
            .fetch_all(pool)
            .await
    }

    /// Find a rank by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Rank>, sqlx::Error> {
        sqlx::query_as::<_, Rank>("SELECT * FROM ranks WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Top rank suggestions, ordered by level before frequency so the
    /// progression reads naturally in a dropdown.
    pub async fn autocomplete(
        pool: &PgPool,
        term: Option<&str>,
    ) -> Result<Vec<RankSuggestion>, sqlx::Error> {
        let pattern = term.map(text::contains_pattern);
        let folded = text::folded_column("name");
        let query = format!(
            "SELECT name, level, COUNT(*) AS count \
             FROM ranks \
             WHERE name IS NOT NULL AND ($1::TEXT IS NULL OR {folded} LIKE $1) \
             GROUP BY name, level \
             HAVING COUNT(*) > 0 \
             ORDER BY level ASC, count DESC, name \
             LIMIT $2"
        );
        sqlx::query_as::<_, RankSuggestion>(&query)
            .bind(pattern)
            .bind(AUTOCOMPLETE_LIMIT)
            .fetch_all(pool)
            .await
    }
}
