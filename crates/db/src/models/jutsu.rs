//! Jutsu (technique) reference entity.

use narutodex_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `jutsus` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Jutsu {
    pub id: DbId,
    pub name: String,
    pub alternate_name: Option<String>,
    pub description: String,
    pub kind: String,
    pub nature: Option<String>,
    pub classification: String,
    pub range: String,
    pub primary_user: String,
    pub created_at: Timestamp,
}
