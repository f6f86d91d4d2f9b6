//! Team reference entity.

use narutodex_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `teams` table, enriched with the linked village's name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Team {
    pub id: DbId,
    pub name: String,
    pub village_id: Option<DbId>,
    pub leader: Option<String>,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub village_name: Option<String>,
}
