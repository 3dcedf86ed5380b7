//! Authentication primitives.
//!
//! - [`jwt`] -- stateless HS256 access tokens carrying a permission list.

pub mod jwt;
