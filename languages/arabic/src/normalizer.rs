//! Canonical spelling for colloquial Arabic lookup keys.
//!
//! Folding rules:
//! - hamza/alef variants (`إ`, `أ`, `آ`) → plain `ا`
//! - alef-maksura `ى` → `ي`
//! - hamza-on-waw `ؤ` → `و`, hamza-on-yeh `ئ` → `ي`
//! - teh-marbuta `ة` → `ه`
//! - combining marks U+064B..=U+065F (short vowels, tanwin, hamza marks)
//!   are dropped
//!
//! Nothing else is altered; non-Arabic text passes through unchanged.

use mujam_core::Normalizer;

/// Apply the folding rules to `text`. Pure, deterministic, and idempotent:
/// the output contains none of the characters the rules rewrite.
pub fn fold(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            'إ' | 'أ' | 'آ' => out.push('ا'),
            'ى' => out.push('ي'),
            'ؤ' => out.push('و'),
            'ئ' => out.push('ي'),
            'ة' => out.push('ه'),
            '\u{064B}'..='\u{065F}' => {}
            _ => out.push(ch),
        }
    }
    out
}

/// The [`Normalizer`] implementation for Arabic.
pub struct ArabicNormalizer;

impl Normalizer for ArabicNormalizer {
    fn normalize(&self, text: &str) -> String {
        fold(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hamza_alef_variants_unify() {
        assert_eq!(fold("أحمد"), "احمد");
        assert_eq!(fold("إحمد"), "احمد");
        assert_eq!(fold("آحمد"), "احمد");
        assert_eq!(fold("أحمد"), fold("احمد"));
        assert_eq!(fold("إحمد"), fold("احمد"));
    }

    #[test]
    fn letter_folds() {
        assert_eq!(fold("مستشفى"), "مستشفي");
        assert_eq!(fold("مؤمن"), "مومن");
        assert_eq!(fold("قارئ"), "قاري");
        assert_eq!(fold("مدرسة"), "مدرسه");
    }

    #[test]
    fn diacritics_are_dropped() {
        assert_eq!(fold("كَتَبَ"), fold("كتب"));
        assert_eq!(fold("مُدَرِّسَةٌ"), "مدرسه");
    }

    #[test]
    fn non_arabic_passes_through() {
        assert_eq!(fold("hello, World! 42"), "hello, World! 42");
        assert_eq!(fold("كلمة word"), "كلمه word");
        assert_eq!(fold(""), "");
    }

    #[test]
    fn idempotent() {
        for input in ["أَهْلاً وسَهْلاً", "مستشفى", "مؤتمر", "ئء", "plain", "إِمَّا"] {
            let once = fold(input);
            assert_eq!(fold(&once), once, "not idempotent for {input:?}");
        }
    }
}
