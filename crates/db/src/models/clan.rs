//! Clan reference entity.

use narutodex_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `clans` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Clan {
    pub id: DbId,
    pub name: String,
    pub symbol: Option<String>,
    pub primary_element: Option<String>,
    pub description: Option<String>,
    pub created_at: Timestamp,
}
