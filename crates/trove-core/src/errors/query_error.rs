/// Request-boundary errors. Rejected before any dataset work happens.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("product not found: {id}")]
    NotFound { id: String },

    #[error("invalid request: {reason}")]
    Validation { reason: String },
}
