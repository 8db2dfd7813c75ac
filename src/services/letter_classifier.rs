/// Vowels in reporting order
pub const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

/// The remaining 21 ASCII letters
pub const CONSONANTS: &str = "BCDFGHJKLMNPQRSTVWXYZ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterClass {
    Vowel,
    Consonant,
}

/// Classify a character against the ASCII alphabet.
/// Returns the uppercased letter with its class, or None for anything outside A-Z.
pub fn classify_letter(c: char) -> Option<(char, LetterClass)> {
    let upper = c.to_ascii_uppercase();
    if VOWELS.contains(&upper) {
        Some((upper, LetterClass::Vowel))
    } else if CONSONANTS.contains(upper) {
        Some((upper, LetterClass::Consonant))
    } else {
        None
    }
}
