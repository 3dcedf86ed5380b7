use std::time::Duration;

use musicdb_core::error::CoreError;
use musicdb_core::music::ENTITY;
use musicdb_core::types::DbId;

/// Failures reported by the versioned store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No row with this id, or the id is not a valid key (< 1).
    #[error("music {id} not found")]
    NotFound { id: DbId },

    /// The conditional update matched no row: the id is gone or the stored
    /// version moved on.
    #[error("edit conflict on music {id}")]
    EditConflict { id: DbId },

    #[error("query exceeded {0:?}")]
    Timeout(Duration),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id } => CoreError::NotFound { entity: ENTITY, id },
            StoreError::EditConflict { id } => CoreError::EditConflict { entity: ENTITY, id },
            StoreError::Timeout(limit) => {
                CoreError::Internal(format!("list query exceeded {limit:?}"))
            }
            StoreError::Database(e) => CoreError::Internal(format!("database error: {e}")),
        }
    }
}
