use super::tokenizer::tokenize_name;
use crate::catalog::store::CatalogStore;
use std::collections::{HashMap, HashSet};

/// The inverted index over the catalog.
///
/// Two mappings, both pure functions of the item set: token -> posting set of
/// item ids, and category id -> item ids in catalog order. Building twice
/// from the same store yields equal indexes.
#[derive(Debug, PartialEq, Eq)]
pub struct CatalogIndex {
    token_index: HashMap<String, HashSet<String>>,
    category_index: HashMap<String, Vec<String>>,
}

impl CatalogIndex {
    pub fn build(store: &CatalogStore) -> Self {
        let mut token_index: HashMap<String, HashSet<String>> = HashMap::new();
        let mut category_index: HashMap<String, Vec<String>> = HashMap::new();

        for category in store.categories() {
            category_index.entry(category.id.clone()).or_default();
        }

        for item in store.items() {
            for token in tokenize_name(&item.name) {
                token_index
                    .entry(token)
                    .or_default()
                    .insert(item.id.clone());
            }
            category_index
                .entry(item.category_id.clone())
                .or_default()
                .push(item.id.clone());
        }

        tracing::debug!(
            "Built catalog index: {} tokens over {} items",
            token_index.len(),
            store.item_count()
        );

        Self {
            token_index,
            category_index,
        }
    }

    /// Posting set for a token, if that exact token was indexed.
    pub fn exact_matches(&self, term: &str) -> Option<&HashSet<String>> {
        self.token_index.get(term)
    }

    /// Item ids for every indexed token that starts with `term`.
    ///
    /// Linear scan over the vocabulary; fine at catalog scale (a few hundred
    /// items). A trie would make this proportional to match count instead.
    pub fn prefix_matches(&self, term: &str) -> HashSet<String> {
        let mut ids = HashSet::new();
        for (token, posting) in &self.token_index {
            if token.starts_with(term) {
                ids.extend(posting.iter().cloned());
            }
        }
        ids
    }

    /// Item ids belonging to a category, in catalog order. Empty for unknown
    /// category ids.
    pub fn items_in_category(&self, category_id: &str) -> &[String] {
        self.category_index
            .get(category_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The full category grouping, for stats and bulk listing.
    pub fn category_index(&self) -> &HashMap<String, Vec<String>> {
        &self.category_index
    }

    pub fn token_count(&self) -> usize {
        self.token_index.len()
    }
}
