//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts (where the entity is mutable)
//! - A `Deserialize` update DTO (all `Option` fields) for coalesce-merges

pub mod autocomplete;
pub mod bijuu;
pub mod character;
pub mod clan;
pub mod element;
pub mod jutsu;
pub mod rank;
pub mod stats;
pub mod team;
pub mod user;
pub mod village;
