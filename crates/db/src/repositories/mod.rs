//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod bijuu_repo;
pub mod character_repo;
pub mod clan_repo;
pub mod element_repo;
pub mod jutsu_repo;
pub mod rank_repo;
pub mod stats_repo;
pub mod team_repo;
pub mod user_repo;
pub mod village_repo;

pub use bijuu_repo::BijuuRepo;
pub use character_repo::CharacterRepo;
pub use clan_repo::ClanRepo;
pub use element_repo::ElementRepo;
pub use jutsu_repo::JutsuRepo;
pub use rank_repo::RankRepo;
pub use stats_repo::StatsRepo;
pub use team_repo::TeamRepo;
pub use user_repo::UserRepo;
pub use village_repo::VillageRepo;

/// Maximum number of autocomplete suggestions returned per query.
pub(crate) const AUTOCOMPLETE_LIMIT: i64 = 10;
