/// Keyword store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("the word '{0}' is already recorded")]
    DuplicateKeyword(String),

    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Submission rejections raised before the store is reached.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("a word is required")]
    EmptyKeyword,

    #[error("a meaning is required")]
    EmptyMeaning,

    #[error("a usage example is required")]
    EmptyExample,
}

/// Everything that can go wrong recording a new word.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
