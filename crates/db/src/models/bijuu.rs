//! Tailed-beast reference entity.

use narutodex_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `bijuus` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Bijuu {
    pub id: DbId,
    pub name: String,
    pub tail_count: i32,
    pub current_jinchuriki: Option<String>,
    pub primary_element: String,
    pub description: String,
    pub created_at: Timestamp,
}
