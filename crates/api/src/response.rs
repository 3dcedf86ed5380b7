//! Shared response envelope types for API handlers.
//!
//! Single resources use a `{ "data": ... }` envelope; lists add the
//! pagination metadata alongside: `{ "data": [...], "metadata": {...} }`.

use musicdb_core::pagination::Metadata;
use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// ```ignore
/// Ok(Json(DataResponse { data: music }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// `{ "data": [T], "metadata": {...} }` envelope for paginated lists.
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T: Serialize> {
    pub data: Vec<T>,
    pub metadata: Metadata,
}
