//! Themed word set definitions
//!
//! A definition is the immutable input of one round: an id, a theme and
//! five distinct 5-letter words.

use super::word::{WORD_LEN, Word, WordError};
use thiserror::Error;

/// Number of words in every set
pub const WORDS_PER_SET: usize = 5;

/// Number of cells in the grid (5 words × 5 letters)
pub const GRID_SIZE: usize = WORDS_PER_SET * WORD_LEN;

/// Error type for invalid word set definitions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordSetError {
    #[error("word set id must not be empty")]
    EmptyId,
    #[error("word set '{id}' needs exactly {WORDS_PER_SET} words, got {count}")]
    WrongWordCount { id: String, count: usize },
    #[error("word set '{id}' has invalid word '{word}': {source}")]
    InvalidWord {
        id: String,
        word: String,
        source: WordError,
    },
    #[error("word set '{id}' repeats the word {word}")]
    DuplicateWord { id: String, word: String },
}

/// One puzzle: id, theme and the five words hidden in the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSetDefinition {
    id: String,
    theme: String,
    words: [Word; WORDS_PER_SET],
}

impl WordSetDefinition {
    /// Build and validate a definition
    ///
    /// # Errors
    /// Returns `WordSetError` if the id is empty, the word count is not 5,
    /// a word is not exactly 5 ASCII letters, or a word is repeated.
    ///
    /// # Examples
    /// ```
    /// use quizwordz::core::WordSetDefinition;
    ///
    /// let set = WordSetDefinition::new(
    ///     "t1",
    ///     "Colors",
    ///     &["BLACK", "WHITE", "GREEN", "BROWN", "AMBER"],
    /// )
    /// .unwrap();
    /// assert_eq!(set.theme(), "Colors");
    /// assert!(WordSetDefinition::new("t2", "Short", &["RED"]).is_err());
    /// ```
    pub fn new<S: AsRef<str>>(
        id: impl Into<String>,
        theme: impl Into<String>,
        words: &[S],
    ) -> Result<Self, WordSetError> {
        let id = id.into().trim().to_string();
        if id.is_empty() {
            return Err(WordSetError::EmptyId);
        }

        if words.len() != WORDS_PER_SET {
            return Err(WordSetError::WrongWordCount {
                id,
                count: words.len(),
            });
        }

        let mut parsed = Vec::with_capacity(WORDS_PER_SET);
        for raw in words {
            let word = Word::new(raw.as_ref()).map_err(|source| WordSetError::InvalidWord {
                id: id.clone(),
                word: raw.as_ref().to_string(),
                source,
            })?;
            if parsed.contains(&word) {
                return Err(WordSetError::DuplicateWord {
                    id,
                    word: word.text().to_string(),
                });
            }
            parsed.push(word);
        }

        let words: [Word; WORDS_PER_SET] = parsed
            .try_into()
            .map_err(|v: Vec<Word>| WordSetError::WrongWordCount {
                id: id.clone(),
                count: v.len(),
            })?;

        Ok(Self {
            id,
            theme: theme.into().trim().to_string(),
            words,
        })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn theme(&self) -> &str {
        &self.theme
    }

    #[must_use]
    pub const fn words(&self) -> &[Word; WORDS_PER_SET] {
        &self.words
    }

    /// Whether `word` is one of the set's words
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// All 25 letters, words concatenated in definition order
    #[must_use]
    pub fn letters(&self) -> Vec<u8> {
        self.words
            .iter()
            .flat_map(|w| w.chars().iter().copied())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLORS: [&str; 5] = ["BLACK", "WHITE", "GREEN", "BROWN", "AMBER"];

    #[test]
    fn valid_definition() {
        let set = WordSetDefinition::new("t1", "Colors", &COLORS).unwrap();
        assert_eq!(set.id(), "t1");
        assert_eq!(set.words()[2].text(), "GREEN");
        assert_eq!(set.letters().len(), GRID_SIZE);
        assert_eq!(&set.letters()[..5], b"BLACK");
    }

    #[test]
    fn words_are_normalized() {
        let set = WordSetDefinition::new(
            "t1",
            "Colors",
            &["black", "white", "green", "brown", "amber"],
        )
        .unwrap();
        assert!(set.contains(&Word::new("AMBER").unwrap()));
    }

    #[test]
    fn rejects_wrong_count() {
        let err = WordSetDefinition::new("t1", "Colors", &COLORS[..4]).unwrap_err();
        assert_eq!(
            err,
            WordSetError::WrongWordCount {
                id: "t1".to_string(),
                count: 4
            }
        );
    }

    #[test]
    fn rejects_invalid_word() {
        let err = WordSetDefinition::new("t1", "Colors", &["BLACK", "WHITE", "GREEN", "BROWN", "TEAL"])
            .unwrap_err();
        assert!(matches!(err, WordSetError::InvalidWord { ref word, .. } if word == "TEAL"));
    }

    #[test]
    fn rejects_duplicate_word() {
        let err = WordSetDefinition::new("t1", "Colors", &["BLACK", "WHITE", "GREEN", "black", "AMBER"])
            .unwrap_err();
        assert!(matches!(err, WordSetError::DuplicateWord { ref word, .. } if word == "BLACK"));
    }

    #[test]
    fn rejects_empty_id() {
        assert_eq!(
            WordSetDefinition::new("  ", "Colors", &COLORS),
            Err(WordSetError::EmptyId)
        );
    }
}
