//! Shared domain types, errors, and pure helpers for the Narutodex API.
//!
//! This crate has no database or HTTP dependencies so its helpers can be
//! unit-tested in isolation and reused by any future tooling.

pub mod error;
pub mod text;
pub mod types;
