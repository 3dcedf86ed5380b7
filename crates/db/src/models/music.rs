//! Music track entity model and DTOs.

use musicdb_core::music::{compact_genres, MusicFields};
use musicdb_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A track as seen by callers. `genres` never contains nulls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Music {
    pub id: DbId,
    pub title: String,
    pub duration: i32,
    pub popularity: f64,
    pub genres: Vec<String>,
    pub created_at: Timestamp,
    pub version: i32,
}

impl Music {
    pub fn fields(&self) -> MusicFields<'_> {
        MusicFields {
            title: &self.title,
            duration: self.duration,
            popularity: self.popularity,
            genres: Some(self.genres.as_slice()),
        }
    }

    /// Overwrite the fields present in `input`; absent fields keep their
    /// current values. `id`, `created_at` and `version` are untouched.
    pub fn apply_update(&mut self, input: UpdateMusic) {
        if let Some(title) = input.title {
            self.title = title;
        }
        if let Some(duration) = input.duration {
            self.duration = duration;
        }
        if let Some(popularity) = input.popularity {
            self.popularity = popularity;
        }
        if let Some(genres) = input.genres {
            self.genres = genres;
        }
    }
}

/// A row from the `musics` table.
///
/// PostgreSQL arrays may hold `NULL` elements, so genres are decoded as
/// optional and compacted on conversion to [`Music`].
#[derive(Debug, FromRow)]
pub(crate) struct MusicRow {
    pub id: DbId,
    pub title: String,
    pub duration: i32,
    pub popularity: f64,
    pub genres: Vec<Option<String>>,
    pub created_at: Timestamp,
    pub version: i32,
}

impl From<MusicRow> for Music {
    fn from(row: MusicRow) -> Self {
        Music {
            id: row.id,
            title: row.title,
            duration: row.duration,
            popularity: row.popularity,
            genres: compact_genres(row.genres),
            created_at: row.created_at,
            version: row.version,
        }
    }
}

/// DTO for creating a new track.
///
/// Every field defaults so that a missing field is reported by validation
/// rather than rejected during deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateMusic {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub duration: i32,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub genres: Option<Vec<String>>,
}

impl CreateMusic {
    pub fn fields(&self) -> MusicFields<'_> {
        MusicFields {
            title: &self.title,
            duration: self.duration,
            popularity: self.popularity,
            genres: self.genres.as_deref(),
        }
    }
}

/// DTO for a partial update. All fields optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMusic {
    pub title: Option<String>,
    pub duration: Option<i32>,
    pub popularity: Option<f64>,
    pub genres: Option<Vec<String>>,
}
