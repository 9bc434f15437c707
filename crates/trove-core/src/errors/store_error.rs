/// Dataset store errors for flat-file operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("dataset unavailable at {path}: {reason}")]
    Unavailable { path: String, reason: String },

    #[error("CSV error: {message}")]
    Csv { message: String },

    #[error("I/O error during persist: {message}")]
    Io { message: String },

    #[error("duplicate product id: {id}")]
    DuplicateId { id: String },
}
