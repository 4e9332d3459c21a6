use crate::entry::{Entry, NewEntry};
use crate::error::{StoreError, SubmitError};
use crate::normalize::Normalizer;
use crate::preprocess::{DefaultPreprocessor, Preprocessor};
use crate::store::KeywordStore;
use crate::validate;

/// Outcome of looking a word up.
#[derive(Debug, Clone)]
pub struct Lookup {
    /// The canonical form the raw input resolved to.
    pub keyword: String,
    /// The stored entry, when the word is already recorded.
    pub entry: Option<Entry>,
}

/// Ties a normalizer and a keyword store into the lookup/submit/browse flow.
///
/// Both collaborators are injected, so the same flow runs against any
/// [`KeywordStore`] implementation.
pub struct Lexicon<N, S> {
    normalizer: N,
    store: S,
    preprocessor: DefaultPreprocessor,
}

impl<N: Normalizer, S: KeywordStore> Lexicon<N, S> {
    pub fn new(normalizer: N, store: S) -> Self {
        Self {
            normalizer,
            store,
            preprocessor: DefaultPreprocessor,
        }
    }

    /// Canonical form of raw user input: hygiene pass, then folding.
    pub fn canonicalize(&self, raw: &str) -> String {
        self.normalizer.normalize(&self.preprocessor.process(raw))
    }

    pub fn lookup(&self, raw: &str) -> Result<Lookup, StoreError> {
        let keyword = self.canonicalize(raw);
        let entry = self.store.get(&keyword)?;
        Ok(Lookup { keyword, entry })
    }

    /// Record a new word after validating the required fields.
    ///
    /// The meaning and example must be non-empty; the note is optional.
    /// The insert itself is atomic, so a word recorded in the meantime
    /// surfaces as [`StoreError::DuplicateKeyword`].
    pub fn submit(
        &mut self,
        raw: &str,
        meaning: &str,
        example: &str,
        note: Option<&str>,
    ) -> Result<Entry, SubmitError> {
        let keyword = self.canonicalize(raw);
        validate::submission(&keyword, meaning, example)?;

        let entry = self.store.insert_if_absent(NewEntry {
            keyword,
            meaning: meaning.trim().to_string(),
            example: example.trim().to_string(),
            note: note
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(String::from),
        })?;

        tracing::info!(keyword = %entry.keyword, "recorded new word");
        Ok(entry)
    }

    /// Entries whose keyword starts with the given letter. The letter is
    /// canonicalized first, so hamza-carrying forms resolve to their plain
    /// prefix.
    pub fn browse(&self, letter: &str) -> Result<Vec<Entry>, StoreError> {
        let letter = self.canonicalize(letter);
        self.store.fetch_by_prefix(&letter)
    }

    pub fn entries(&self) -> Result<Vec<Entry>, StoreError> {
        self.store.all_entries()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}
