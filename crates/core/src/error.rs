/// Domain-level error taxonomy shared by all layers.
///
/// Validation messages are human-readable and returned to the caller
/// verbatim; they are the only error detail the HTTP surface exposes for
/// rejected input.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// `key` is the lookup value the caller used: a numeric id for most
    /// resources, a slug for posts.
    #[error("Entity not found: {entity} '{key}'")]
    NotFound { entity: &'static str, key: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for [`CoreError::NotFound`] with any displayable key.
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }
}
