//! Permission extractors for write routes.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use musicdb_core::error::CoreError;
use musicdb_core::permissions::{has_permission, PERMISSION_MUSICS_WRITE};

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `musics:write` permission. Rejects with 401 when no valid
/// token is present and 403 when the token lacks the permission.
///
/// ```ignore
/// async fn create(RequireMusicsWrite(user): RequireMusicsWrite) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireMusicsWrite(pub AuthUser);

impl FromRequestParts<AppState> for RequireMusicsWrite {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !has_permission(&user.permissions, PERMISSION_MUSICS_WRITE) {
            tracing::debug!(user_id = user.user_id, "Missing musics:write permission");
            return Err(AppError::Core(CoreError::Forbidden(
                "Your user account doesn't have the necessary permissions to access this resource"
                    .into(),
            )));
        }
        Ok(RequireMusicsWrite(user))
    }
}
