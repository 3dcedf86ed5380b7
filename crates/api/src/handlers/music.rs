//! Handlers for the `/musics` resource.
//!
//! Reads are public; writes go through [`RequireMusicsWrite`]. Updates are
//! read-modify-write with optimistic concurrency: the fetched version is
//! carried into the conditional write, and a concurrent change surfaces as
//! 409 rather than being overwritten.

use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use musicdb_core::error::CoreError;
use musicdb_core::music::{validate_music, ENTITY};
use musicdb_db::models::music::{CreateMusic, UpdateMusic};
use musicdb_db::repositories::MusicRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, RecordId};
use crate::middleware::permission::RequireMusicsWrite;
use crate::query::ListMusicsParams;
use crate::response::{DataResponse, PaginatedResponse};
use crate::state::AppState;

/// Optional request header pinning the version the client last saw.
pub const EXPECTED_VERSION_HEADER: &str = "x-expected-version";

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/musics?title=&genres=&page=&page_size=&sort=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListMusicsParams>,
) -> AppResult<impl IntoResponse> {
    let filters = params.filters().map_err(CoreError::ValidationFailed)?;
    let genres = params.genres();

    let (musics, metadata) =
        MusicRepo::list(&state.pool, params.title(), &genres, &filters).await?;

    Ok(Json(PaginatedResponse {
        data: musics,
        metadata,
    }))
}

/// GET /api/v1/musics/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<impl IntoResponse> {
    let music = MusicRepo::get(&state.pool, id).await?;
    Ok(Json(DataResponse { data: music }))
}

/// POST /api/v1/musics
///
/// Returns 201 with a `Location` header pointing at the new track.
pub async fn create(
    RequireMusicsWrite(user): RequireMusicsWrite,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateMusic>,
) -> AppResult<impl IntoResponse> {
    validate_music(&input.fields())
        .into_result()
        .map_err(CoreError::ValidationFailed)?;

    let music = MusicRepo::insert(&state.pool, &input).await?;
    tracing::info!(music_id = music.id, user_id = user.user_id, "Music created");

    let location = format!("/api/v1/musics/{}", music.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(DataResponse { data: music }),
    ))
}

/// PATCH /api/v1/musics/{id}
///
/// Partial update: absent fields keep their stored values and the merged
/// record is re-validated. If `X-Expected-Version` is sent and does not match
/// the stored version, the request fails with 409 before anything is written.
pub async fn update(
    RequireMusicsWrite(user): RequireMusicsWrite,
    State(state): State<AppState>,
    RecordId(id): RecordId,
    headers: HeaderMap,
    JsonBody(input): JsonBody<UpdateMusic>,
) -> AppResult<impl IntoResponse> {
    let expected_version = expected_version(&headers)?;

    let mut music = MusicRepo::get(&state.pool, id).await?;
    if expected_version.is_some_and(|v| v != music.version) {
        return Err(CoreError::EditConflict { entity: ENTITY, id }.into());
    }

    music.apply_update(input);
    validate_music(&music.fields())
        .into_result()
        .map_err(CoreError::ValidationFailed)?;

    MusicRepo::update(&state.pool, &mut music).await?;
    tracing::info!(
        music_id = id,
        version = music.version,
        user_id = user.user_id,
        "Music updated"
    );

    Ok(Json(DataResponse { data: music }))
}

/// DELETE /api/v1/musics/{id}
pub async fn delete(
    RequireMusicsWrite(user): RequireMusicsWrite,
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<StatusCode> {
    MusicRepo::delete(&state.pool, id).await?;
    tracing::info!(music_id = id, user_id = user.user_id, "Music deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse the optional `X-Expected-Version` header.
fn expected_version(headers: &HeaderMap) -> AppResult<Option<i32>> {
    let Some(value) = headers.get(EXPECTED_VERSION_HEADER) else {
        return Ok(None);
    };
    value
        .to_str()
        .ok()
        .and_then(|v| v.trim().parse::<i32>().ok())
        .map(Some)
        .ok_or_else(|| {
            AppError::BadRequest(format!("{EXPECTED_VERSION_HEADER} must be an integer"))
        })
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn missing_expected_version_is_none() {
        assert_eq!(expected_version(&HeaderMap::new()).unwrap(), None);
    }

    #[test]
    fn expected_version_is_parsed() {
        let mut headers = HeaderMap::new();
        headers.insert(EXPECTED_VERSION_HEADER, HeaderValue::from_static(" 4 "));
        assert_eq!(expected_version(&headers).unwrap(), Some(4));
    }

    #[test]
    fn malformed_expected_version_is_bad_request() {
        let mut headers = HeaderMap::new();
        headers.insert(EXPECTED_VERSION_HEADER, HeaderValue::from_static("four"));
        assert!(matches!(
            expected_version(&headers),
            Err(AppError::BadRequest(_))
        ));
    }
}
