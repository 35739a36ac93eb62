//! Word set catalog
//!
//! The ordered collection of puzzles a round can be started from. The
//! built-in catalog is compiled into the binary; a custom one can be loaded
//! from a file in the same format.

mod embedded;
pub mod loader;

pub use embedded::{WORD_SETS, WORD_SETS_COUNT};

use crate::core::{WordSetDefinition, WordSetError};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("line {line}: expected 'id|theme|W1 W2 W3 W4 W5', got '{content}'")]
    Malformed { line: usize, content: String },
    #[error(transparent)]
    InvalidSet(#[from] WordSetError),
    #[error("duplicate word set id '{0}'")]
    DuplicateId(String),
    #[error("catalog contains no word sets")]
    Empty,
}

/// Validated, non-empty list of word sets with unique ids
#[derive(Debug, Clone)]
pub struct Catalog {
    sets: Vec<WordSetDefinition>,
}

impl Catalog {
    /// Build a catalog
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` for no sets and
    /// `CatalogError::DuplicateId` when two sets share an id.
    pub fn new(sets: Vec<WordSetDefinition>) -> Result<Self, CatalogError> {
        if sets.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = FxHashSet::default();
        for set in &sets {
            if !seen.insert(set.id().to_ascii_lowercase()) {
                return Err(CatalogError::DuplicateId(set.id().to_string()));
            }
        }
        Ok(Self { sets })
    }

    /// The built-in catalog
    ///
    /// # Errors
    ///
    /// Returns an error if an embedded entry fails validation.
    ///
    /// # Examples
    /// ```
    /// use quizwordz::catalog::Catalog;
    ///
    /// let catalog = Catalog::embedded().unwrap();
    /// assert!(catalog.by_id("colors").is_some());
    /// ```
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::new(loader::sets_from_table(WORD_SETS)?)
    }

    /// Load a catalog file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains an invalid set.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, CatalogError> {
        Self::new(loader::load_from_file(path)?)
    }

    #[must_use]
    pub fn sets(&self) -> &[WordSetDefinition] {
        &self.sets
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Zero-based index of the set with `id` (case-insensitive)
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        let id = id.trim();
        self.sets
            .iter()
            .position(|set| set.id().eq_ignore_ascii_case(id))
    }

    #[must_use]
    pub fn by_id(&self, id: &str) -> Option<&WordSetDefinition> {
        self.position(id).map(|i| &self.sets[i])
    }

    /// Set to open a session with
    ///
    /// A known `id` selects that set; a missing or unknown id falls back to
    /// a uniformly random set.
    pub fn select<R: Rng + ?Sized>(&self, id: Option<&str>, rng: &mut R) -> &WordSetDefinition {
        id.and_then(|id| self.by_id(id))
            .unwrap_or_else(|| self.random(rng))
    }

    /// Uniformly random set other than `current_id` ("play again")
    ///
    /// With a single set in the catalog that set is returned.
    pub fn pick_other<R: Rng + ?Sized>(&self, current_id: &str, rng: &mut R) -> &WordSetDefinition {
        let others: Vec<&WordSetDefinition> = self
            .sets
            .iter()
            .filter(|set| !set.id().eq_ignore_ascii_case(current_id))
            .collect();
        others
            .choose(rng)
            .copied()
            .unwrap_or_else(|| self.random(rng))
    }

    fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> &WordSetDefinition {
        &self.sets[rng.random_range(0..self.sets.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn set(id: &str) -> WordSetDefinition {
        WordSetDefinition::new(id, id, &["BLACK", "WHITE", "GREEN", "BROWN", "AMBER"]).unwrap()
    }

    #[test]
    fn embedded_catalog_is_valid() {
        let catalog = Catalog::embedded().unwrap();
        assert_eq!(catalog.len(), WORD_SETS_COUNT);
        assert_eq!(WORD_SETS.len(), WORD_SETS_COUNT);
    }

    #[test]
    fn embedded_letters_form_full_grids() {
        let catalog = Catalog::embedded().unwrap();
        for set in catalog.sets() {
            assert_eq!(set.letters().len(), 25, "set '{}'", set.id());
        }
    }

    #[test]
    fn rejects_empty_and_duplicates() {
        assert!(matches!(Catalog::new(vec![]), Err(CatalogError::Empty)));
        assert!(matches!(
            Catalog::new(vec![set("a"), set("A")]),
            Err(CatalogError::DuplicateId(id)) if id == "A"
        ));
    }

    #[test]
    fn select_by_known_id() {
        let catalog = Catalog::new(vec![set("a"), set("b"), set("c")]).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..10 {
            assert_eq!(catalog.select(Some("b"), &mut rng).id(), "b");
        }
        assert_eq!(catalog.select(Some(" C "), &mut rng).id(), "c");
    }

    #[test]
    fn select_unknown_or_missing_falls_back_to_random() {
        let catalog = Catalog::new(vec![set("a"), set("b"), set("c")]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let picked: FxHashSet<String> = (0..60)
            .map(|i| {
                let id = if i % 2 == 0 { None } else { Some("nope") };
                catalog.select(id, &mut rng).id().to_string()
            })
            .collect();
        assert_eq!(picked.len(), 3);
    }

    #[test]
    fn pick_other_avoids_current() {
        let catalog = Catalog::new(vec![set("a"), set("b"), set("c")]).unwrap();
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..30 {
            assert_ne!(catalog.pick_other("b", &mut rng).id(), "b");
        }
    }

    #[test]
    fn pick_other_with_single_set() {
        let catalog = Catalog::new(vec![set("only")]).unwrap();
        assert_eq!(catalog.pick_other("only", &mut rand::rng()).id(), "only");
    }

    #[test]
    fn position_is_case_insensitive() {
        let catalog = Catalog::new(vec![set("a"), set("b")]).unwrap();
        assert_eq!(catalog.position("B"), Some(1));
        assert_eq!(catalog.position("z"), None);
    }
}
