//! Character entity model and DTOs.

use narutodex_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A plain row from the `characters` table, as returned by inserts and updates.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Character {
    pub id: DbId,
    pub name: String,
    pub alternate_name: Option<String>,
    pub description: Option<String>,
    pub backstory: Option<String>,
    pub village_id: Option<DbId>,
    pub clan_id: Option<DbId>,
    pub rank_id: Option<DbId>,
    pub team_id: Option<DbId>,
    pub mentor_id: Option<DbId>,
    pub age: Option<i32>,
    pub height_cm: Option<i32>,
    pub weight_kg: Option<f64>,
    pub birthday: Option<String>,
    pub element_ids: Option<Vec<DbId>>,
    pub primary_jutsu: Option<String>,
    pub secondary_jutsu: Option<String>,
    pub bloodline_trait: Option<String>,
    pub is_active: bool,
    pub is_alive: bool,
    pub photo_url: Option<String>,
    pub wiki_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A character row enriched with display names from the reference tables.
///
/// Enrichment fields come from LEFT JOINs, so a character with no linked
/// village/clan/rank/team/mentor still appears with those fields `null`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CharacterDetail {
    pub id: DbId,
    pub name: String,
    pub alternate_name: Option<String>,
    pub description: Option<String>,
    pub backstory: Option<String>,
    pub village_id: Option<DbId>,
    pub clan_id: Option<DbId>,
    pub rank_id: Option<DbId>,
    pub team_id: Option<DbId>,
    pub mentor_id: Option<DbId>,
    pub age: Option<i32>,
    pub height_cm: Option<i32>,
    pub weight_kg: Option<f64>,
    pub birthday: Option<String>,
    pub element_ids: Option<Vec<DbId>>,
    pub primary_jutsu: Option<String>,
    pub secondary_jutsu: Option<String>,
    pub bloodline_trait: Option<String>,
    pub is_active: bool,
    pub is_alive: bool,
    pub photo_url: Option<String>,
    pub wiki_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub village_name: Option<String>,
    pub village_symbol: Option<String>,
    pub clan_name: Option<String>,
    pub clan_symbol: Option<String>,
    pub rank_name: Option<String>,
    pub rank_level: Option<i32>,
    pub team_name: Option<String>,
    pub mentor_name: Option<String>,
}

/// DTO for creating a new character.
///
/// `name`, `village_id`, `clan_id`, and `rank_id` are required; they are
/// `Option` here so the handler can reject missing fields with a 400 instead
/// of a deserialization error.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCharacter {
    pub name: Option<String>,
    pub alternate_name: Option<String>,
    pub description: Option<String>,
    pub backstory: Option<String>,
    pub village_id: Option<DbId>,
    pub clan_id: Option<DbId>,
    pub rank_id: Option<DbId>,
    pub team_id: Option<DbId>,
    pub mentor_id: Option<DbId>,
    pub age: Option<i32>,
    pub height_cm: Option<i32>,
    pub weight_kg: Option<f64>,
    pub birthday: Option<String>,
    pub element_ids: Option<Vec<DbId>>,
    pub primary_jutsu: Option<String>,
    pub secondary_jutsu: Option<String>,
    pub bloodline_trait: Option<String>,
    /// Defaults to `true` if omitted.
    pub is_active: Option<bool>,
    /// Defaults to `true` if omitted.
    pub is_alive: Option<bool>,
    pub photo_url: Option<String>,
    pub wiki_url: Option<String>,
}

/// DTO for updating a character. Every field is optional and merged with
/// `COALESCE`, so an omitted field keeps its stored value. Omission is
/// indistinguishable from "no change": nullable text fields cannot be
/// cleared and booleans can only change by explicit value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCharacter {
    pub name: Option<String>,
    pub alternate_name: Option<String>,
    pub description: Option<String>,
    pub backstory: Option<String>,
    pub village_id: Option<DbId>,
    pub clan_id: Option<DbId>,
    pub rank_id: Option<DbId>,
    pub team_id: Option<DbId>,
    pub mentor_id: Option<DbId>,
    pub age: Option<i32>,
    pub height_cm: Option<i32>,
    pub weight_kg: Option<f64>,
    pub birthday: Option<String>,
    pub element_ids: Option<Vec<DbId>>,
    pub primary_jutsu: Option<String>,
    pub secondary_jutsu: Option<String>,
    pub bloodline_trait: Option<String>,
    pub is_active: Option<bool>,
    pub is_alive: Option<bool>,
    pub photo_url: Option<String>,
    pub wiki_url: Option<String>,
}

/// Parsed filter set for the character list query. All fields optional,
/// combined with logical AND.
#[derive(Debug, Clone, Default)]
pub struct CharacterFilters {
    /// Raw free-text term; folded and lower-cased by the repository.
    pub q: Option<String>,
    pub village_id: Option<DbId>,
    pub clan_id: Option<DbId>,
    pub rank_id: Option<DbId>,
    pub team_id: Option<DbId>,
    pub alive: Option<bool>,
    pub active: Option<bool>,
    /// Matches characters whose element set overlaps this one.
    pub elements: Option<Vec<DbId>>,
}
