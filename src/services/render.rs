use crate::models::LetterCounts;

/// `the letter 'X' appears N times`, with the letter uppercased
pub fn render_phrase(letter: char, count: usize) -> String {
    format!("the letter '{}' appears {} times", letter.to_uppercase(), count)
}

/// Join one phrase per entry with ", ", keeping the order of the counts
pub fn render_counts(counts: &LetterCounts) -> String {
    counts
        .iter()
        .map(|&(letter, count)| render_phrase(letter, count))
        .collect::<Vec<_>>()
        .join(", ")
}
