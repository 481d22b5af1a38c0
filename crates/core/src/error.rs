use crate::types::DbId;
use crate::validation::FieldError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// One entry per violated field constraint.
    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("Path id {path_id} does not match body id {body_id:?}")]
    PathBodyMismatch {
        path_id: DbId,
        body_id: Option<DbId>,
    },
}

/// Reject an update whose body id differs from (or is missing next to) the path id.
pub fn ensure_ids_match(path_id: DbId, body_id: Option<DbId>) -> Result<(), CoreError> {
    if body_id == Some(path_id) {
        Ok(())
    } else {
        Err(CoreError::PathBodyMismatch { path_id, body_id })
    }
}
