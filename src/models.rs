use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize, Serializer};
use crate::error::AnalysisError;

/// Which half of the alphabet an analysis reports on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisKind {
    Vowels,
    Consonants,
}

impl AnalysisKind {
    /// Path segment and CLI name of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisKind::Vowels => "vowels",
            AnalysisKind::Consonants => "consonants",
        }
    }
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisKind {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "vowels" => Ok(AnalysisKind::Vowels),
            "consonants" => Ok(AnalysisKind::Consonants),
            _ => Err(AnalysisError::UnknownKind(s.to_string())),
        }
    }
}

/// Where the counting happens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Online,
    Offline,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Online => f.write_str("online"),
            Mode::Offline => f.write_str("offline"),
        }
    }
}

/// A single analysis, with its text already case-folded.
/// Folding is ASCII-only so no character outside A-Z can fold into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub text: String,
    pub kind: AnalysisKind,
}

impl AnalysisRequest {
    pub fn new(text: &str, kind: AnalysisKind) -> Self {
        AnalysisRequest {
            text: text.to_ascii_lowercase(),
            kind,
        }
    }
}

/// Ordered letter -> occurrence pairs.
///
/// Order is significant: it is the order phrases are rendered in, and the
/// order keys are written when serialized as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts(Vec<(char, usize)>);

impl LetterCounts {
    pub fn new() -> Self {
        LetterCounts(Vec::new())
    }

    pub fn push(&mut self, letter: char, count: usize) {
        self.0.push((letter, count));
    }

    #[cfg(test)]
    pub fn get(&self, letter: char) -> Option<usize> {
        self.0.iter().find(|(c, _)| *c == letter).map(|&(_, n)| n)
    }

    #[cfg(test)]
    pub fn letters(&self) -> Vec<char> {
        self.0.iter().map(|&(c, _)| c).collect()
    }

    pub fn total(&self) -> usize {
        self.0.iter().map(|&(_, n)| n).sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(char, usize)> {
        self.0.iter()
    }
}

impl FromIterator<(char, usize)> for LetterCounts {
    fn from_iter<I: IntoIterator<Item = (char, usize)>>(iter: I) -> Self {
        LetterCounts(iter.into_iter().collect())
    }
}

impl Serialize for LetterCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(c, n)| (c.to_string(), n)))
    }
}

/// Request body of the counting endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeBody {
    pub text: String,
}
