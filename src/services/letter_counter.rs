use std::collections::HashMap;
use crate::models::{AnalysisKind, LetterCounts};
use crate::services::letter_classifier::{classify_letter, LetterClass, VOWELS};

/// Per-letter occurrences of one text, split into vowels and consonants
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LetterTally {
    vowels: HashMap<char, usize>,
    consonants: HashMap<char, usize>,
}

/// Count every ASCII letter in the text, case-insensitively
pub fn tally_letters(text: &str) -> LetterTally {
    let mut tally = LetterTally::default();
    for c in text.chars() {
        match classify_letter(c) {
            Some((letter, LetterClass::Vowel)) => *tally.vowels.entry(letter).or_insert(0) += 1,
            Some((letter, LetterClass::Consonant)) => *tally.consonants.entry(letter).or_insert(0) += 1,
            None => {}
        }
    }
    tally
}

impl LetterTally {
    #[cfg(test)]
    pub fn vowel_total(&self) -> usize {
        self.vowels.values().sum()
    }

    #[cfg(test)]
    pub fn consonant_total(&self) -> usize {
        self.consonants.values().sum()
    }

    /// All five vowels in A, E, I, O, U order, zero counts included
    pub fn vowel_counts(&self) -> LetterCounts {
        VOWELS
            .iter()
            .map(|&v| (v, self.vowels.get(&v).copied().unwrap_or(0)))
            .collect()
    }

    /// Only the consonants that occurred, in ascending order.
    /// Unlike vowels, absent consonants are left out.
    pub fn consonant_counts(&self) -> LetterCounts {
        let mut present: Vec<(char, usize)> = self.consonants
            .iter()
            .filter(|&(_, &n)| n > 0)
            .map(|(&c, &n)| (c, n))
            .collect();
        present.sort_by_key(|&(c, _)| c);
        present.into_iter().collect()
    }

    pub fn counts_for(&self, kind: AnalysisKind) -> LetterCounts {
        match kind {
            AnalysisKind::Vowels => self.vowel_counts(),
            AnalysisKind::Consonants => self.consonant_counts(),
        }
    }
}

/// Count the letters of one kind in the text
pub fn count_letters(text: &str, kind: AnalysisKind) -> LetterCounts {
    tally_letters(text).counts_for(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hello_world_vowels() {
        let counts = count_letters("hello world", AnalysisKind::Vowels);
        assert_eq!(counts.letters(), vec!['A', 'E', 'I', 'O', 'U']);
        assert_eq!(counts.get('E'), Some(1));
        assert_eq!(counts.get('O'), Some(2));
        assert_eq!(counts.get('A'), Some(0));
    }

    #[test]
    fn test_hello_world_consonants() {
        let counts = count_letters("hello world", AnalysisKind::Consonants);
        assert_eq!(counts.letters(), vec!['D', 'H', 'L', 'R', 'W']);
        assert_eq!(counts.get('L'), Some(3));
        assert_eq!(counts.get('B'), None); // absent consonants are omitted
    }

    #[test]
    fn test_digits_only() {
        let vowels = count_letters("1234", AnalysisKind::Vowels);
        assert_eq!(vowels.len(), 5);
        assert_eq!(vowels.total(), 0);

        let consonants = count_letters("1234", AnalysisKind::Consonants);
        assert!(consonants.is_empty());
    }

    #[test]
    fn test_totals_add_up_for_letters_only() {
        for text in ["hello", "AEIOU", "bcdfg", "Rhythm", "TheQuickBrownFoxJumpsOverTheLazyDog"] {
            let tally = tally_letters(text);
            let letters = text.chars().filter(|c| c.is_ascii_alphabetic()).count();
            assert_eq!(tally.vowel_total() + tally.consonant_total(), letters, "{}", text);
        }
    }

    #[test]
    fn test_non_letters_do_not_affect_counts() {
        // same letters as "hello world", with digits and punctuation in between
        let plain = tally_letters("hello world");
        let noisy = tally_letters("h3e_l-l.o,  w!o?r1l2d");
        for kind in [AnalysisKind::Vowels, AnalysisKind::Consonants] {
            assert_eq!(plain.counts_for(kind), noisy.counts_for(kind), "{}", kind);
        }
        assert_eq!(plain.vowel_total() + plain.consonant_total(), 10);
        assert_eq!(noisy.vowel_total() + noisy.consonant_total(), 10);
    }

    #[test]
    fn test_case_insensitive() {
        for kind in [AnalysisKind::Vowels, AnalysisKind::Consonants] {
            let lower = count_letters("hello", kind);
            assert_eq!(lower, count_letters("Hello", kind));
            assert_eq!(lower, count_letters("HELLO", kind));
        }
    }

    #[test]
    fn test_consonants_sorted_ascending() {
        let counts = count_letters("zyxwvb", AnalysisKind::Consonants);
        assert_eq!(counts.letters(), vec!['B', 'V', 'W', 'X', 'Y', 'Z']);
        assert!(counts.iter().all(|&(_, n)| n >= 1));
    }
}
