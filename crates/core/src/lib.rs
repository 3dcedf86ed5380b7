//! Domain logic for the music catalogue.
//!
//! Everything in this crate is pure: validation rules, the list filter
//! specification, pagination metadata and the error taxonomy. No database
//! or HTTP dependencies live here so the rules can be unit tested in
//! isolation and shared by the repository and API layers.

pub mod error;
pub mod filters;
pub mod music;
pub mod pagination;
pub mod permissions;
pub mod types;
pub mod validation;
