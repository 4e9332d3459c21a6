/// The letter selector offered for browsing: the 28 Arabic letters, with heh
/// in its ligature form `هـ` as users expect to see it in isolation.
pub const BROWSE_LETTERS: [&str; 28] = [
    "ا", "ب", "ت", "ث", "ج", "ح", "خ", "د", "ذ", "ر", "ز", "س", "ش", "ص", "ض", "ط", "ظ", "ع",
    "غ", "ف", "ق", "ك", "ل", "م", "ن", "هـ", "و", "ي",
];

/// Resolve a user-chosen letter to the single character stored keywords are
/// prefixed with.
///
/// Hamza-carrying forms fold to their plain letter (`أ` browses `ا`) and the
/// ligature `هـ` resolves to `ه`. Returns `None` for anything that is not a
/// single browsable letter.
pub fn storage_prefix(letter: &str) -> Option<char> {
    let folded = crate::normalizer::fold(letter.trim());
    let mut chars = folded.chars();
    let first = chars.next()?;

    // the ligature heh carries a tatweel after the letter itself
    match chars.next() {
        None | Some('\u{0640}') => {}
        Some(_) => return None,
    }

    BROWSE_LETTERS
        .iter()
        .any(|l| l.chars().next() == Some(first))
        .then_some(first)
}
