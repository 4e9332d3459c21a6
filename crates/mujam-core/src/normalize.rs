/// Canonical-spelling seam for a language's lookup keys.
///
/// Implementations map spelling variants of the same word to a single
/// canonical form used for lookup, dedup, and storage.
pub trait Normalizer: Send + Sync {
    /// Map raw text to its canonical form.
    ///
    /// Must be deterministic and idempotent: normalizing an
    /// already-normalized string is a no-op.
    fn normalize(&self, text: &str) -> String;
}
