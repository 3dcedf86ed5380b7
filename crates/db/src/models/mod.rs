//! Row models and DTOs.

pub mod music;
