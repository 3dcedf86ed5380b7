//! Request handlers.
//!
//! Handlers validate input, delegate to the repositories in `musicdb_db`
//! and map errors via [`AppError`](crate::error::AppError).

pub mod music;
