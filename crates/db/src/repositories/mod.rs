//! Repository layer.

pub mod music_repo;

pub use music_repo::MusicRepo;
