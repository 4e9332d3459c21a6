use mujam_core::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed csv record at line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}
