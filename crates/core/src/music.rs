//! Validation rules for music tracks.
//!
//! [`validate_music`] is evaluated both on creation and on every partial
//! update (against the merged record), so the same rules govern every
//! write that reaches the store.

use std::collections::HashSet;

use crate::validation::FieldErrors;

/// Entity name used in error messages.
pub const ENTITY: &str = "Music";

/// Maximum title length in bytes (not characters).
pub const MAX_TITLE_BYTES: usize = 500;

/// Minimum number of genres on a track.
pub const MIN_GENRES: usize = 1;

/// Maximum number of genres on a track.
///
/// The `musics` table allows up to 8; this tighter bound is the one clients
/// observe.
pub const MAX_GENRES: usize = 5;

/// Borrowed view of the user-editable fields of a track.
///
/// `genres` is `None` when the caller never supplied the field at all, which
/// is reported differently from an empty list.
#[derive(Debug, Clone, Copy)]
pub struct MusicFields<'a> {
    pub title: &'a str,
    pub duration: i32,
    pub popularity: f64,
    pub genres: Option<&'a [String]>,
}

/// Check every rule and return all violations. An empty result means valid.
pub fn validate_music(music: &MusicFields<'_>) -> FieldErrors {
    let genre_count = music.genres.map_or(0, <[String]>::len);
    let genres_unique = music.genres.map_or(true, all_unique);

    [
        (music.title.is_empty(), "title", "must be provided"),
        (
            music.title.len() > MAX_TITLE_BYTES,
            "title",
            "must not be more than 500 bytes long",
        ),
        (music.duration == 0, "duration", "must be provided"),
        (music.duration < 0, "duration", "must be a positive integer"),
        (music.popularity == 0.0, "popularity", "must be provided"),
        // Negated comparison so NaN is rejected too.
        (
            !(music.popularity > 0.0),
            "popularity",
            "must be a positive number",
        ),
        (music.genres.is_none(), "genres", "must be provided"),
        (
            genre_count < MIN_GENRES,
            "genres",
            "must contain at least 1 genre",
        ),
        (
            genre_count > MAX_GENRES,
            "genres",
            "must not contain more than 5 genres",
        ),
        (!genres_unique, "genres", "must not contain duplicate values"),
    ]
    .into_iter()
    .filter(|(failed, _, _)| *failed)
    .map(|(_, field, message)| (field, message))
    .collect()
}

/// Case-sensitive exact-match uniqueness.
fn all_unique(values: &[String]) -> bool {
    let mut seen = HashSet::with_capacity(values.len());
    values.iter().all(|v| seen.insert(v.as_str()))
}

/// Drop `NULL` entries from a genre array read out of PostgreSQL.
pub fn compact_genres(raw: Vec<Option<String>>) -> Vec<String> {
    raw.into_iter().flatten().collect()
}

/// Parse the comma-separated `genres` query parameter.
///
/// Tokens are trimmed; empty tokens are dropped so `"rock,,pop, "` yields
/// `["rock", "pop"]`.
pub fn parse_genre_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect()
}
