//! Repository for the `elements` table.

use narutodex_core::types::DbId;
use sqlx::PgPool;

use crate::models::element::Element;

/// Provides read access to chakra elements.
pub struct ElementRepo;

impl ElementRepo {
    /// List all elements ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Element>, sqlx::Error> {
        sqlx::query_as::<_, Element>("SELECT * FROM elements ORDER BY name")
            .fetch_all(pool)
            .await
    }

    /// Find an element by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Element>, sqlx::Error> {
        sqlx::query_as::<_, Element>("SELECT * FROM elements WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
