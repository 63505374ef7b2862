/// Domain-level error type shared across the workspace.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced entity does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound {
        /// Entity kind, e.g. `"Prompt"`.
        entity: &'static str,
        /// The id that was looked up.
        id: String,
    },

    /// Input failed a validation rule.
    #[error("{0}")]
    Validation(String),

    /// An unexpected internal failure.
    #[error("{0}")]
    Internal(String),
}
