//! Village reference entity.

use narutodex_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `villages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Village {
    pub id: DbId,
    pub name: String,
    pub symbol: Option<String>,
    pub leader: Option<String>,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

/// Village detail row with its members aggregated as a JSON array of
/// `{id, name, rank_name, clan_name, is_alive, is_active}` objects.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VillageDetail {
    pub id: DbId,
    pub name: String,
    pub symbol: Option<String>,
    pub leader: Option<String>,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub characters: serde_json::Value,
}
