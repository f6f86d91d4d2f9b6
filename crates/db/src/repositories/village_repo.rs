//! Repository for the `villages` table.

use narutodex_core::text;
use narutodex_core::types::DbId;
use sqlx::PgPool;

use crate::models::autocomplete::NameSuggestion;
use crate::models::village::{Village, VillageDetail};
use crate::repositories::AUTOCOMPLETE_LIMIT;

/// Provides read access to villages.
pub struct VillageRepo;

impl VillageRepo {
    /// List all villages ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Village>, sqlx::Error> {
        sqlx::query_as::<_, Village>("SELECT * FROM villages ORDER BY name")
            .fetch_all(pool)
            .await
    }

    /// Find a village by id, with its member characters aggregated as a JSON
    /// array ordered by character name.
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<VillageDetail>, sqlx::Error> {
        let query = "SELECT v.*, \
                COALESCE( \
                    JSON_AGG( \
                        JSON_BUILD_OBJECT( \
                            'id', p.id, \
                            'name', p.name, \
                            'rank_name', r.name, \
                            'clan_name', c.name, \
                            'is_alive', p.is_alive, \
                            'is_active', p.is_active \
                        ) ORDER BY p.name \
                    ) FILTER (WHERE p.id IS NOT NULL), \
                    '[]'::json \
                ) AS characters \
             FROM villages v \
             LEFT JOIN characters p ON p.village_id = v.id \
             LEFT JOIN ranks r ON r.id = p.rank_id \
             LEFT JOIN clans c ON c.id = p.clan_id \
             WHERE v.id = $1 \
             GROUP BY v.id";
        sqlx::query_as::<_, VillageDetail>(query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Top village name suggestions: frequency first, then alphabetical,
    /// matched accent-insensitively.
    pub async fn autocomplete(
        pool: &PgPool,
        term: Option<&str>,
    ) -> Result<Vec<NameSuggestion>, sqlx::Error> {
        let pattern = term.map(text::contains_pattern);
        let folded = text::folded_column("name");
        let query = format!(
            "SELECT name, COUNT(*) AS count \
             FROM villages \
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
