//! Route definitions for music tracks.

use axum::routing::get;
use axum::Router;

use crate::handlers::music;
use crate::state::AppState;

/// Routes mounted at `/musics`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create        (musics:write)
/// GET    /{id}   -> get_by_id
/// PATCH  /{id}   -> update        (musics:write)
/// DELETE /{id}   -> delete        (musics:write)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(music::list).post(music::create))
        .route(
            "/{id}",
            get(music::get_by_id)
                .patch(music::update)
                .delete(music::delete),
        )
}
