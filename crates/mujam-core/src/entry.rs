use serde::{Deserialize, Serialize};

/// One dictionary record as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Surrogate key assigned by the store.
    pub id: i64,
    /// Normalized Arabic keyword, globally unique.
    pub keyword: String,
    pub meaning: String,
    pub example: String,
    pub note: Option<String>,
}

/// A submission that passed validation and normalization, ready to persist.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub keyword: String,
    pub meaning: String,
    pub example: String,
    pub note: Option<String>,
}
