//! Autocomplete suggestion rows.

use serde::Serialize;
use sqlx::FromRow;

/// A name suggestion with its occurrence count.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NameSuggestion {
    pub name: String,
    pub count: i64,
}

/// A rank suggestion carries its level so clients can sort consistently.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RankSuggestion {
    pub name: String,
    pub level: i32,
    pub count: i64,
}
