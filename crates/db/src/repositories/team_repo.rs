//! Repository for the `teams` table.

use narutodex_core::types::DbId;
use sqlx::PgPool;

use crate::models::team::Team;

/// Column list shared across queries; teams are always returned with their
/// village name joined in.
const COLUMNS: &str =
    "t.id, t.name, t.village_id, t.leader, t.description, t.created_at, a.name AS village_name";

/// Provides read access to teams.
pub struct TeamRepo;

impl TeamRepo {
    /// List all teams ordered by name, enriched with village names.
    pub async fn list(pool: &PgPool) -> Result<Vec<Team>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM teams t \
             LEFT JOIN villages a ON a.id = t.village_id \
             ORDER BY t.name"
        );
        sqlx::query_as::<_, Team>(&query).fetch_all(pool).await
    }

    /// Find a team by id, enriched with its village name.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Team>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM teams t \
             LEFT JOIN villages a ON a.id = t.village_id \
             WHERE t.id = $1"
        );
        sqlx::query_as::<_, Team>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
