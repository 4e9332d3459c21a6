use unicode_normalization::UnicodeNormalization;

/// Input hygiene applied to raw user text before normalization.
pub trait Preprocessor {
    fn process(&self, text: &str) -> String {
        let mut text = text.trim().to_string();

        if text.is_empty() {
            return text;
        }

        // NFC so decomposed hamza sequences reach the folding rules in
        // precomposed form
        text = text.nfc().collect();

        text = text.replace(['\n', '\r'], "").trim().to_string();

        text
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_strips_newlines() {
        let p = DefaultPreprocessor;
        assert_eq!(p.process("  باب \n"), "باب");
        assert_eq!(p.process(""), "");
    }

    #[test]
    fn composes_decomposed_hamza() {
        let p = DefaultPreprocessor;
        // alef + combining hamza above composes to U+0623
        assert_eq!(p.process("\u{0627}\u{0654}"), "\u{0623}");
    }
}
