//! List command

use crate::catalog::Catalog;

/// One catalog row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// 1-based position, as shown in "Set N of M"
    pub number: usize,
    pub id: String,
    pub theme: String,
}

/// Rows for every set in catalog order
#[must_use]
pub fn list_sets(catalog: &Catalog) -> Vec<CatalogEntry> {
    catalog
        .sets()
        .iter()
        .enumerate()
        .map(|(i, set)| CatalogEntry {
            number: i + 1,
            id: set.id().to_string(),
            theme: set.theme().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_follow_catalog_order() {
        let catalog = Catalog::embedded().unwrap();
        let entries = list_sets(&catalog);
        assert_eq!(entries.len(), catalog.len());
        assert_eq!(entries[0].number, 1);
        assert_eq!(entries[0].id, catalog.sets()[0].id());
        let last = entries.last().unwrap();
        assert_eq!(last.number, catalog.len());
    }
}
