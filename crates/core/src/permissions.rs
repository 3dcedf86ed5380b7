//! Permission codes checked by the API before write operations.

/// Grants create, update and delete on music tracks.
pub const PERMISSION_MUSICS_WRITE: &str = "musics:write";

/// Whether `granted` includes `required`.
pub fn has_permission(granted: &[String], required: &str) -> bool {
    granted.iter().any(|p| p == required)
}
