//! Chakra element reference entity.

use narutodex_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `elements` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Element {
    pub id: DbId,
    pub name: String,
    pub symbol: Option<String>,
    pub description: Option<String>,
    pub created_at: Timestamp,
}
