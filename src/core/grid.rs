//! Grid arrangement
//!
//! The grid is a sequence of 25 letters split into a fixed "solved prefix"
//! (5 letters per solved word, in solve order) and the "active zone" holding
//! every letter not yet pinned. Duplicate letters are tracked by position,
//! never by value.

use super::word::{WORD_LEN, Word};
use super::word_set::{GRID_SIZE, WORDS_PER_SET, WordSetDefinition};
use rand::Rng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Broken grid invariant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The letters of a word being pinned are not all in the active zone.
    /// Only reachable if the letter multiset was corrupted elsewhere.
    #[error("grid corruption: cannot find the letters of {word} in the active zone")]
    Corruption { word: String },
}

/// The 25 letters of a round plus the number of pinned words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    letters: Vec<u8>,
    solved_count: usize,
}

impl Grid {
    /// Shuffle all 25 letters of the set uniformly (Fisher–Yates)
    ///
    /// # Examples
    /// ```
    /// use quizwordz::core::{Grid, WordSetDefinition};
    ///
    /// let set = WordSetDefinition::new(
    ///     "t1",
    ///     "Colors",
    ///     &["BLACK", "WHITE", "GREEN", "BROWN", "AMBER"],
    /// )
    /// .unwrap();
    /// let grid = Grid::initialize(&set, &mut rand::rng());
    /// assert_eq!(grid.letters().len(), 25);
    /// assert!(grid.is_permutation_of(&set));
    /// ```
    pub fn initialize<R: Rng + ?Sized>(set: &WordSetDefinition, rng: &mut R) -> Self {
        let mut letters = set.letters();
        letters.shuffle(rng);
        Self {
            letters,
            solved_count: 0,
        }
    }

    /// Build a grid from an explicit letter layout with nothing solved
    ///
    /// Returns `None` unless exactly 25 letters are given.
    #[must_use]
    pub fn from_letters(letters: &[u8]) -> Option<Self> {
        (letters.len() == GRID_SIZE).then(|| Self {
            letters: letters.to_vec(),
            solved_count: 0,
        })
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> Option<u8> {
        self.letters.get(position).copied()
    }

    #[inline]
    #[must_use]
    pub const fn solved_count(&self) -> usize {
        self.solved_count
    }

    /// Length of the solved prefix; also the first active-zone position
    #[inline]
    #[must_use]
    pub const fn prefix_len(&self) -> usize {
        self.solved_count * WORD_LEN
    }

    /// Whether `position` is selectable (inside the grid, outside the prefix)
    #[inline]
    #[must_use]
    pub const fn is_active(&self, position: usize) -> bool {
        position >= self.prefix_len() && position < GRID_SIZE
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.solved_count == WORDS_PER_SET
    }

    /// Letters of the solved prefix
    #[must_use]
    pub fn solved_letters(&self) -> &[u8] {
        &self.letters[..self.prefix_len()]
    }

    /// Letters of the active zone
    #[must_use]
    pub fn active_letters(&self) -> &[u8] {
        &self.letters[self.prefix_len()..]
    }

    /// First active-zone position holding `letter`
    #[must_use]
    pub fn first_active_position_of(&self, letter: u8) -> Option<usize> {
        self.active_letters()
            .iter()
            .position(|&l| l == letter)
            .map(|offset| self.prefix_len() + offset)
    }

    /// Pin `word` into the next prefix slot
    ///
    /// For each letter of the word in turn, the first active-zone position
    /// (ascending) holding it that is not already taken is chosen. Those
    /// letters move to the next 5 prefix slots in word order; the rest of the
    /// active zone follows in its prior relative order.
    ///
    /// # Errors
    /// Returns `GridError::Corruption` if the word's letters are not all in the
    /// active zone. The grid is left untouched in that case.
    pub fn pin_word(&mut self, word: &Word) -> Result<(), GridError> {
        let start = self.prefix_len();
        let mut taken = [false; GRID_SIZE];

        for &ch in word.chars() {
            let found = (start..GRID_SIZE).find(|&i| !taken[i] && self.letters[i] == ch);
            match found {
                Some(i) => taken[i] = true,
                None => {
                    return Err(GridError::Corruption {
                        word: word.text().to_string(),
                    });
                }
            }
        }

        let rest: Vec<u8> = (start..GRID_SIZE)
            .filter(|&i| !taken[i])
            .map(|i| self.letters[i])
            .collect();

        self.letters.truncate(start);
        self.letters.extend_from_slice(word.chars());
        self.letters.extend(rest);
        self.solved_count += 1;
        Ok(())
    }

    /// Uniformly reshuffle the active zone; the solved prefix is untouched
    pub fn reshuffle_active<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let start = self.prefix_len();
        self.letters[start..].shuffle(rng);
    }

    /// Whether the letters are exactly the multiset of the set's letters
    #[must_use]
    pub fn is_permutation_of(&self, set: &WordSetDefinition) -> bool {
        if self.letters.len() != GRID_SIZE {
            return false;
        }
        let mut counts: FxHashMap<u8, i32> = FxHashMap::default();
        for word in set.words() {
            for (ch, n) in word.letter_counts() {
                *counts.entry(ch).or_insert(0) += i32::from(n);
            }
        }
        for ch in &self.letters {
            *counts.entry(*ch).or_insert(0) -= 1;
        }
        counts.values().all(|&n| n == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn colors() -> WordSetDefinition {
        WordSetDefinition::new("t1", "Colors", &["BLACK", "WHITE", "GREEN", "BROWN", "AMBER"])
            .unwrap()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn initialize_keeps_letter_multiset() {
        let set = colors();
        for seed in 0..20 {
            let grid = Grid::initialize(&set, &mut StdRng::seed_from_u64(seed));
            assert!(grid.is_permutation_of(&set));
            assert_eq!(grid.solved_count(), 0);
            assert_eq!(grid.prefix_len(), 0);
        }
    }

    #[test]
    fn initialize_actually_shuffles() {
        let set = colors();
        let layouts: std::collections::HashSet<Vec<u8>> = (0..10)
            .map(|seed| {
                Grid::initialize(&set, &mut StdRng::seed_from_u64(seed))
                    .letters()
                    .to_vec()
            })
            .collect();
        assert!(layouts.len() > 1);
    }

    #[test]
    fn pin_word_moves_letters_to_prefix_stably() {
        let mut grid = Grid::from_letters(b"WHITEBLACKGREENBROWNAMBER").unwrap();
        grid.pin_word(&word("BLACK")).unwrap();

        assert_eq!(grid.solved_count(), 1);
        assert_eq!(grid.solved_letters(), b"BLACK");
        // Remaining letters keep their prior relative order
        assert_eq!(grid.active_letters(), b"WHITEGREENBROWNAMBER");
    }

    #[test]
    fn pin_word_picks_first_matching_instance_per_letter() {
        // Two B's before the word's L: the greedy match takes position 0 for B
        let mut grid = Grid::from_letters(b"BXBLACKYYYYYYYYYYYYYYYYYY").unwrap();
        grid.pin_word(&word("BLACK")).unwrap();
        assert_eq!(grid.solved_letters(), b"BLACK");
        // The second B (position 2) stays in the active zone, ahead of the Y's
        assert_eq!(&grid.active_letters()[..2], b"XB");
    }

    #[test]
    fn pin_word_handles_repeated_letters_in_word() {
        let mut grid = Grid::from_letters(b"NEERGWHITEBLACKBROWNAMBER").unwrap();
        grid.pin_word(&word("GREEN")).unwrap();
        assert_eq!(grid.solved_letters(), b"GREEN");
        assert_eq!(grid.active_letters(), b"WHITEBLACKBROWNAMBER");
    }

    #[test]
    fn pin_word_never_uses_solved_prefix() {
        let mut grid = Grid::from_letters(b"BLACKWHITEGREENBROWNAMBER").unwrap();
        grid.pin_word(&word("BLACK")).unwrap();
        grid.pin_word(&word("BROWN")).unwrap();
        assert_eq!(grid.solved_letters(), b"BLACKBROWN");
        assert_eq!(grid.active_letters(), b"HITEGEERWNAMBER");
    }

    #[test]
    fn pin_word_reports_corruption_and_leaves_grid() {
        let mut grid = Grid::from_letters(b"BLACKWHITEGREENBROWNAMBER").unwrap();
        let before = grid.clone();
        let err = grid.pin_word(&word("ZEBRA")).unwrap_err();
        assert_eq!(
            err,
            GridError::Corruption {
                word: "ZEBRA".to_string()
            }
        );
        assert_eq!(grid, before);
    }

    #[test]
    fn pin_word_does_not_reuse_prefix_letters() {
        let mut grid = Grid::from_letters(b"BLACKWHITEGREENBROWNAMBER").unwrap();
        grid.pin_word(&word("BLACK")).unwrap();
        // Only one K existed and it is now pinned
        assert!(grid.pin_word(&word("BLACK")).is_err());
    }

    #[test]
    fn reshuffle_leaves_prefix_untouched() {
        let set = colors();
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::from_letters(b"BLACKWHITEGREENBROWNAMBER").unwrap();
        grid.pin_word(&word("WHITE")).unwrap();

        for _ in 0..10 {
            grid.reshuffle_active(&mut rng);
            assert_eq!(grid.solved_letters(), b"WHITE");
            assert!(grid.is_permutation_of(&set));
        }
    }

    #[test]
    fn first_active_position_skips_prefix() {
        let mut grid = Grid::from_letters(b"BLACKWHITEGREENBROWNAMBER").unwrap();
        assert_eq!(grid.first_active_position_of(b'B'), Some(0));
        grid.pin_word(&word("BLACK")).unwrap();
        assert_eq!(grid.first_active_position_of(b'B'), Some(15));
        assert_eq!(grid.first_active_position_of(b'Z'), None);
    }

    #[test]
    fn is_active_bounds() {
        let mut grid = Grid::from_letters(b"BLACKWHITEGREENBROWNAMBER").unwrap();
        grid.pin_word(&word("BLACK")).unwrap();
        assert!(!grid.is_active(4));
        assert!(grid.is_active(5));
        assert!(grid.is_active(24));
        assert!(!grid.is_active(25));
    }

    #[test]
    fn from_letters_requires_full_grid() {
        assert!(Grid::from_letters(b"BLACK").is_none());
    }
}
