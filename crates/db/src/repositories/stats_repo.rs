//! Aggregate counts across the encyclopedia.

use sqlx::PgPool;

use crate::models::stats::Stats;

/// Provides the `/stats` aggregate view.
pub struct StatsRepo;

impl StatsRepo {
    /// Count rows in every reference table plus active/alive characters.
    pub async fn collect(pool: &PgPool) -> Result<Stats, sqlx::Error> {
        let villages_count = count(pool, "SELECT COUNT(*) FROM villages").await?;
        let clans_count = count(pool, "SELECT COUNT(*) FROM clans").await?;
        let ranks_count = count(pool, "SELECT COUNT(*) FROM ranks").await?;
        let elements_count = count(pool, "SELECT COUNT(*) FROM elements").await?;
        let teams_count = count(pool, "SELECT COUNT(*) FROM teams").await?;
        let bijuus_count = count(pool, "SELECT COUNT(*) FROM bijuus").await?;
        let jutsus_count = count(pool, "SELECT COUNT(*) FROM jutsus").await?;
        let characters_active =
            count(pool, "SELECT COUNT(*) FROM characters WHERE is_active = TRUE").await?;
        let characters_alive =
            count(pool, "SELECT COUNT(*) FROM characters WHERE is_alive = TRUE").await?;

        Ok(Stats {
            villages_count,
            clans_count,
            ranks_count,
            elements_count,
            teams_count,
            bijuus_count,
            jutsus_count,
            characters_active,
            characters_alive,
        })
    }
}

async fn count(pool: &PgPool, query: &str) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(query).fetch_one(pool).await
}
