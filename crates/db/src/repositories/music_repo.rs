//! Repository for the `musics` table.
//!
//! Writes are optimistic: [`MusicRepo::update`] only applies when the stored
//! `version` still equals the one carried by the caller, and bumps it by one
//! in the same statement. No locks are held between read and write.

use std::time::Duration;

use musicdb_core::filters::Filters;
use musicdb_core::pagination::{calculate_metadata, Metadata};
use musicdb_core::types::DbId;
use sqlx::PgPool;

use crate::error::StoreError;
use crate::models::music::{CreateMusic, Music, MusicRow};
use crate::query::{MusicListQuery, COLUMNS};

/// Upper bound on a list request (page + count).
pub const LIST_QUERY_TIMEOUT: Duration = Duration::from_secs(3);

/// Provides versioned CRUD operations for music tracks.
pub struct MusicRepo;

impl MusicRepo {
    /// Insert a new track. The database assigns `id`, `created_at` and
    /// `version = 1`.
    ///
    /// Callers validate `input` first; the table's CHECK constraints are the
    /// only guard here.
    pub async fn insert(pool: &PgPool, input: &CreateMusic) -> Result<Music, StoreError> {
        let query = format!(
            "INSERT INTO musics (title, duration, genres, popularity) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, MusicRow>(&query)
            .bind(&input.title)
            .bind(input.duration)
            .bind(input.genres.as_deref().unwrap_or_default())
            .bind(input.popularity)
            .fetch_one(pool)
            .await?;

        tracing::debug!(music_id = row.id, "Inserted music");
        Ok(row.into())
    }

    /// Fetch a track by id. Ids below 1 are never looked up.
    pub async fn get(pool: &PgPool, id: DbId) -> Result<Music, StoreError> {
        if id < 1 {
            return Err(StoreError::NotFound { id });
        }

        let query = format!("SELECT {COLUMNS} FROM musics WHERE id = $1");
        sqlx::query_as::<_, MusicRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .map(Music::from)
            .ok_or(StoreError::NotFound { id })
    }

    /// Write `music`'s fields if the stored version equals `music.version`.
    ///
    /// On success `music.version` is replaced with the new stored version so
    /// the caller can chain another update. If no row matched (deleted, or
    /// modified since it was read) returns [`StoreError::EditConflict`] and
    /// leaves both the row and `music` unchanged.
    pub async fn update(pool: &PgPool, music: &mut Music) -> Result<(), StoreError> {
        let new_version: Option<i32> = sqlx::query_scalar(
            "UPDATE musics SET \
                title = $2, \
                duration = $3, \
                popularity = $4, \
                genres = $5, \
                version = version + 1 \
             WHERE id = $1 AND version = $6 \
             RETURNING version",
        )
        .bind(music.id)
        .bind(&music.title)
        .bind(music.duration)
        .bind(music.popularity)
        .bind(&music.genres)
        .bind(music.version)
        .fetch_optional(pool)
        .await?;

        match new_version {
            Some(version) => {
                tracing::debug!(music_id = music.id, version, "Updated music");
                music.version = version;
                Ok(())
            }
            None => {
                tracing::debug!(
                    music_id = music.id,
                    expected_version = music.version,
                    "Update matched no row"
                );
                Err(StoreError::EditConflict { id: music.id })
            }
        }
    }

    /// Hard-delete a track by id.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<(), StoreError> {
        if id < 1 {
            return Err(StoreError::NotFound { id });
        }

        let result = sqlx::query("DELETE FROM musics WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound { id });
        }
        tracing::debug!(music_id = id, "Deleted music");
        Ok(())
    }

    /// List one page of tracks matching `title` (full-text) and containing
    /// every genre in `genres`, with metadata for the whole filtered set.
    ///
    /// Both statements run under [`LIST_QUERY_TIMEOUT`].
    pub async fn list(
        pool: &PgPool,
        title: &str,
        genres: &[String],
        filters: &Filters,
    ) -> Result<(Vec<Music>, Metadata), StoreError> {
        Self::list_with_timeout(pool, title, genres, filters, LIST_QUERY_TIMEOUT).await
    }

    /// [`MusicRepo::list`] with an explicit time limit.
    pub async fn list_with_timeout(
        pool: &PgPool,
        title: &str,
        genres: &[String],
        filters: &Filters,
        limit: Duration,
    ) -> Result<(Vec<Music>, Metadata), StoreError> {
        let query = MusicListQuery::new(title, genres, filters);
        let page_sql = query.page_sql();
        let count_sql = query.count_sql();

        let page = sqlx::query_as::<_, MusicRow>(&page_sql)
            .bind(title)
            .bind(genres)
            .bind(filters.limit())
            .bind(filters.offset())
            .fetch_all(pool);
        let count = sqlx::query_scalar::<_, i64>(&count_sql)
            .bind(title)
            .bind(genres)
            .fetch_one(pool);

        let (rows, total_records) = tokio::time::timeout(limit, async {
            tokio::try_join!(page, count)
        })
        .await
        .map_err(|_| {
            tracing::warn!(timeout = ?limit, "Music list query timed out");
            StoreError::Timeout(limit)
        })??;

        let metadata = calculate_metadata(total_records, filters.page, filters.page_size);
        tracing::debug!(
            returned = rows.len(),
            total_records,
            page = filters.page,
            "Listed music"
        );

        Ok((rows.into_iter().map(Music::from).collect(), metadata))
    }
}
