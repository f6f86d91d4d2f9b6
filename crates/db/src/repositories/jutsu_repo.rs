//! Repository for the `jutsus` table.

use narutodex_core::types::DbId;
use sqlx::PgPool;

use crate::models::jutsu::Jutsu;

/// Provides read access to jutsus.
pub struct JutsuRepo;

impl JutsuRepo {
    /// List all jutsus ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Jutsu>, sqlx::Error> {
        sqlx::query_as::<_, Jutsu>("SELECT * FROM jutsus ORDER BY name")
            .fetch_all(pool)
            .await
    }

    /// Find a jutsu by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Jutsu>, sqlx::Error> {
        sqlx::query_as::<_, Jutsu>("SELECT * FROM jutsus WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
