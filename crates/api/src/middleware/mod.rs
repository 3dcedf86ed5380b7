//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the caller from a JWT Bearer token.
//! - [`permission::RequireMusicsWrite`] -- Requires the `musics:write` permission.

pub mod auth;
pub mod permission;
