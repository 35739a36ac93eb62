//! Puzzle word representation
//!
//! A Word stores a 5-letter word as upper-case ASCII bytes.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Number of letters in every puzzle word
pub const WORD_LEN: usize = 5;

/// A 5-letter puzzle word
///
/// Letters are normalized to upper case so grid letters and word letters
/// compare byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LEN],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("word must contain only ASCII letters")]
    NonAscii,
    #[error("word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use quizwordz::core::Word;
    ///
    /// let word = Word::new("amber").unwrap();
    /// assert_eq!(word.text(), "AMBER");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("gr3en").is_err());
    /// ```
    ///
    /// # Panics
    /// Will not panic - the `expect()` call is guaranteed safe by length validation.
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().trim().to_uppercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.len() != WORD_LEN {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let chars: [u8; WORD_LEN] = text
            .as_bytes()
            .try_into()
            .expect("length already validated");

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LEN] {
        &self.chars
    }

    /// First letter of the word, the one a hint points at
    #[inline]
    #[must_use]
    pub const fn first_letter(&self) -> u8 {
        self.chars[0]
    }

    /// Whether `letters` spell this word exactly
    #[inline]
    #[must_use]
    pub fn matches(&self, letters: &[u8]) -> bool {
        letters == self.chars.as_slice()
    }

    /// Get the count of each letter in the word
    #[must_use]
    pub fn letter_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("BLACK").unwrap();
        assert_eq!(word.text(), "BLACK");
        assert_eq!(word.chars(), b"BLACK");
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("black").unwrap();
        assert_eq!(word.text(), "BLACK");

        let word2 = Word::new(" GrEeN ").unwrap();
        assert_eq!(word2.text(), "GREEN");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("too long"),
            Err(WordError::InvalidLength(8))
        ));
        assert!(matches!(Word::new("red"), Err(WordError::InvalidLength(3))));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(matches!(
            Word::new("whit3"),
            Err(WordError::InvalidCharacters)
        ));
        assert!(matches!(
            Word::new("wh-te"),
            Err(WordError::InvalidCharacters)
        ));
        assert!(matches!(Word::new("crêpe"), Err(WordError::NonAscii)));
    }

    #[test]
    fn word_first_letter() {
        let word = Word::new("amber").unwrap();
        assert_eq!(word.first_letter(), b'A');
    }

    #[test]
    fn word_matches_letters() {
        let word = Word::new("green").unwrap();
        assert!(word.matches(b"GREEN"));
        assert!(!word.matches(b"GREEK"));
        assert!(!word.matches(b"GREE"));
    }

    #[test]
    fn word_letter_counts_duplicates() {
        let word = Word::new("green").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts.get(&b'G'), Some(&1));
        assert_eq!(counts.get(&b'R'), Some(&1));
        assert_eq!(counts.get(&b'E'), Some(&2));
        assert_eq!(counts.get(&b'N'), Some(&1));
        assert_eq!(counts.len(), 4);
    }

    #[test]
    fn word_display() {
        let word = Word::new("brown").unwrap();
        assert_eq!(format!("{word}"), "BROWN");
    }

    #[test]
    fn word_equality_case_insensitive() {
        assert_eq!(Word::new("white").unwrap(), Word::new("WHITE").unwrap());
        assert_ne!(Word::new("white").unwrap(), Word::new("black").unwrap());
    }
}
