//! Word set loading utilities
//!
//! Parses the catalog text format (`id|theme|W1 W2 W3 W4 W5`, one set per
//! line, `#` comments) from files or from the embedded table.

use super::CatalogError;
use crate::core::WordSetDefinition;
use std::fs;
use std::path::Path;

/// Parse catalog text
///
/// # Errors
///
/// Returns `CatalogError::Malformed` for a line without three `|`-separated
/// fields and `CatalogError::InvalidSet` for a set that fails validation.
///
/// # Examples
/// ```
/// use quizwordz::catalog::loader::parse_word_sets;
///
/// let sets = parse_word_sets("# demo\ncolors|Colors|BLACK WHITE GREEN BROWN AMBER\n").unwrap();
/// assert_eq!(sets.len(), 1);
/// assert_eq!(sets[0].theme(), "Colors");
/// ```
pub fn parse_word_sets(content: &str) -> Result<Vec<WordSetDefinition>, CatalogError> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(number, line)| {
            let fields: Vec<&str> = line.split('|').map(str::trim).collect();
            let [id, theme, words] = fields[..] else {
                return Err(CatalogError::Malformed {
                    line: number,
                    content: line.to_string(),
                });
            };
            let words: Vec<&str> = words.split_whitespace().collect();
            Ok(WordSetDefinition::new(id, theme, &words)?)
        })
        .collect()
}

/// Load word sets from a file
///
/// # Errors
///
/// Returns `CatalogError::Io` if the file cannot be read, or any parse error
/// from [`parse_word_sets`].
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<WordSetDefinition>, CatalogError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_word_sets(&content)
}

/// Convert an embedded table into validated definitions
///
/// # Errors
///
/// Returns `CatalogError::InvalidSet` for the first entry that fails validation.
pub fn sets_from_table(
    table: &[(&str, &str, &[&str])],
) -> Result<Vec<WordSetDefinition>, CatalogError> {
    table
        .iter()
        .map(|&(id, theme, words)| Ok(WordSetDefinition::new(id, theme, words)?))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordSetError;

    #[test]
    fn parses_sets_and_skips_comments() {
        let content = "\
# Themes
fruits|Fruits|APPLE GRAPE LEMON MANGO PEACH

colors | Colors | black white green brown amber
";
        let sets = parse_word_sets(content).unwrap();
        assert_eq!(sets.len(), 2);
        assert_eq!(sets[0].id(), "fruits");
        assert_eq!(sets[1].id(), "colors");
        assert_eq!(sets[1].words()[0].text(), "BLACK");
    }

    #[test]
    fn reports_malformed_line_number() {
        let content = "fruits|Fruits|APPLE GRAPE LEMON MANGO PEACH\nbroken line\n";
        let err = parse_word_sets(content).unwrap_err();
        assert!(matches!(err, CatalogError::Malformed { line: 2, .. }));
    }

    #[test]
    fn reports_invalid_set() {
        let err = parse_word_sets("short|Short|APPLE GRAPE").unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidSet(WordSetError::WrongWordCount { count: 2, .. })
        ));
    }

    #[test]
    fn table_conversion() {
        let table: &[(&str, &str, &[&str])] =
            &[("colors", "Colors", &["BLACK", "WHITE", "GREEN", "BROWN", "AMBER"])];
        let sets = sets_from_table(table).unwrap();
        assert_eq!(sets[0].theme(), "Colors");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_from_file("definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
