//! HTTP handlers, one module per resource.

pub mod auth;
pub mod bijuu;
pub mod character;
pub mod clan;
pub mod element;
pub mod jutsu;
pub mod rank;
pub mod stats;
pub mod team;
pub mod village;

use serde::Deserialize;

/// Query parameters shared by the autocomplete endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct AutocompleteParams {
    /// Optional search term; matched accent- and case-insensitively.
    pub q: Option<String>,
}
