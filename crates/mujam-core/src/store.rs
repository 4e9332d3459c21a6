use crate::entry::{Entry, NewEntry};
use crate::error::StoreError;

/// Persistent keyword store operations.
///
/// Keywords passed in are already normalized; implementations compare them
/// exactly and never re-normalize. Abstracted behind a trait so the domain
/// flow can run against SQLite in production and an in-memory store in tests.
pub trait KeywordStore {
    /// True iff an entry with exactly this normalized keyword is stored.
    fn exists(&self, keyword: &str) -> Result<bool, StoreError>;

    /// Fetch a single entry by its exact normalized keyword.
    fn get(&self, keyword: &str) -> Result<Option<Entry>, StoreError>;

    /// Insert a new entry unless its keyword is already present.
    ///
    /// Atomic: a duplicate submission cannot slip in between an existence
    /// check and the write. Fails with [`StoreError::DuplicateKeyword`] and
    /// leaves the store untouched when the keyword is taken.
    fn insert_if_absent(&mut self, entry: NewEntry) -> Result<Entry, StoreError>;

    /// All entries whose keyword starts with the given normalized letter,
    /// in storage (insertion) order.
    fn fetch_by_prefix(&self, letter: &str) -> Result<Vec<Entry>, StoreError>;

    /// Every stored entry, in storage order.
    fn all_entries(&self) -> Result<Vec<Entry>, StoreError>;

    /// Number of stored entries.
    fn len(&self) -> Result<usize, StoreError>;
}
