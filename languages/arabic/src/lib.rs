pub mod letters;
pub mod normalizer;

pub use letters::{BROWSE_LETTERS, storage_prefix};
pub use normalizer::{ArabicNormalizer, fold};

#[cfg(test)]
mod tests {
    use super::*;
    use mujam_core::{KeywordStore, Lexicon};
    use mujam_store::MemoryStore;

    fn lexicon() -> Lexicon<ArabicNormalizer, MemoryStore> {
        Lexicon::new(ArabicNormalizer, MemoryStore::new())
    }

    #[test]
    fn absent_word_then_submit_then_found() {
        let mut lexicon = lexicon();

        assert!(!lexicon.store().exists("اريد").unwrap());
        assert!(lexicon.lookup("اريد").unwrap().entry.is_none());

        lexicon.submit("اريد", "m", "e", None).unwrap();

        assert!(lexicon.store().exists("اريد").unwrap());
        assert!(lexicon.lookup("اريد").unwrap().entry.is_some());
    }

    #[test]
    fn spelling_variants_find_the_same_entry() {
        let mut lexicon = lexicon();
        lexicon.submit("أحمد", "name", "مثال", None).unwrap();

        for variant in ["احمد", "أحمد", "إحمد"] {
            let found = lexicon.lookup(variant).unwrap();
            assert_eq!(found.keyword, "احمد");
            assert!(found.entry.is_some(), "lookup failed for {variant}");
        }
    }

    #[test]
    fn browse_by_ligature_heh() {
        let mut lexicon = lexicon();
        lexicon.submit("هدوم", "clothes", "مثال", None).unwrap();
        lexicon.submit("باب", "door", "مثال", None).unwrap();

        let prefix = storage_prefix("هـ").unwrap().to_string();
        let entries = lexicon.browse(&prefix).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].keyword, "هدوم");
    }
}
