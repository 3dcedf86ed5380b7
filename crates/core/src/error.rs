use crate::types::DbId;
use crate::validation::FieldErrors;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// The version carried by an update no longer matches the stored row.
    #[error("Edit conflict: {entity} with id {id} was modified concurrently")]
    EditConflict { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    ValidationFailed(FieldErrors),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
