//! Rank reference entity.

use narutodex_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `ranks` table. `level` drives the canonical sort order.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Rank {
    pub id: DbId,
    pub name: String,
    pub level: i32,
    pub description: Option<String>,
    pub created_at: Timestamp,
}
