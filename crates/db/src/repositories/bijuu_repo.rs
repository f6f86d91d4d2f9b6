//! Repository for the `bijuus` table.

use narutodex_core::types::DbId;
use sqlx::PgPool;

use crate::models::bijuu::Bijuu;

/// Provides read access to tailed beasts.
pub struct BijuuRepo;

impl BijuuRepo {
    /// List all bijuus ordered by tail count.
    pub async fn list(pool: &PgPool) -> Result<Vec<Bijuu>, sqlx::Error> {
        sqlx::query_as::<_, Bijuu>("SELECT * FROM bijuus ORDER BY tail_count")
            .fetch_all(pool)
            .await
    }

    /// Find a bijuu by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Bijuu>, sqlx::Error> {
        sqlx::query_as::<_, Bijuu>("SELECT * FROM bijuus WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
