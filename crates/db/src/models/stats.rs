//! Encyclopedia-wide aggregate counts.

use serde::Serialize;

/// Row counts across all reference tables plus character status counts.
#[derive(Debug, Clone, Serialize)]
pub struct Stats {
    pub villages_count: i64,
    pub clans_count: i64,
    pub ranks_count: i64,
    pub elements_count: i64,
    pub teams_count: i64,
    pub bijuus_count: i64,
    pub jutsus_count: i64,
    pub characters_active: i64,
    pub characters_alive: i64,
}
