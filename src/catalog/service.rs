use super::store::CatalogStore;
use super::types::{CatalogSummary, Category, Item, ValidationReport};
use crate::search::cache::{CacheKey, SearchCache, DEFAULT_CAPACITY};
use crate::search::engine;
use crate::search::index::CatalogIndex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Editorially curated "frequently added" shortcut list, resolved in this
/// order. Ids missing from the loaded catalog are skipped at read time.
pub const POPULAR_ITEM_IDS: &[&str] = &[
    "bananas",
    "whole_milk",
    "eggs",
    "white_bread",
    "chicken_breast",
    "apples",
    "cheddar_cheese",
    "toilet_paper",
];

/// The catalog read API.
///
/// Owns the store, the lazily-built inverted index, and the search cache.
/// Constructed once at startup and shared by reference (`Arc` at the HTTP
/// layer); every operation is a synchronous, infallible read. Unknown ids
/// and blank queries are normal inputs with empty/absent outputs, never
/// errors.
pub struct CatalogService {
    store: CatalogStore,
    index: OnceLock<CatalogIndex>,
    cache: SearchCache,
}

impl CatalogService {
    pub fn new(store: CatalogStore) -> Self {
        Self::with_cache_capacity(store, DEFAULT_CAPACITY)
    }

    pub fn with_cache_capacity(store: CatalogStore, cache_capacity: usize) -> Self {
        Self {
            store,
            index: OnceLock::new(),
            cache: SearchCache::new(cache_capacity),
        }
    }

    /// The index is built on first use and exactly once; concurrent first
    /// queries serialize behind the `OnceLock`.
    fn index(&self) -> &CatalogIndex {
        self.index.get_or_init(|| CatalogIndex::build(&self.store))
    }

    /// Forces the one-time index build up front instead of on the first
    /// query, and logs what was built.
    pub fn ensure_index(&self) {
        let index = self.index();
        tracing::info!(
            "Catalog index ready: {} tokens over {} items in {} categories",
            index.token_count(),
            self.store.item_count(),
            self.store.category_count()
        );
    }

    /// All categories with their derived item lists materialized.
    pub fn get_categories(&self) -> Vec<Category> {
        let index = self.index();
        self.store
            .categories()
            .iter()
            .map(|category| {
                let mut category = category.clone();
                category.item_ids = index.items_in_category(&category.id).to_vec();
                category
            })
            .collect()
    }

    /// Items of one category in catalog order; empty for unknown ids.
    pub fn get_items_by_category(&self, category_id: &str) -> Vec<Item> {
        self.index()
            .items_in_category(category_id)
            .iter()
            .filter_map(|id| self.store.get_item(id).cloned())
            .collect()
    }

    pub fn get_item_by_id(&self, item_id: &str) -> Option<&Item> {
        self.store.get_item(item_id)
    }

    /// Every item, flattened across categories in category order.
    pub fn get_all_items(&self) -> Vec<Item> {
        self.store
            .categories()
            .iter()
            .flat_map(|category| self.get_items_by_category(&category.id))
            .collect()
    }

    /// Ranked search over the catalog, optionally scoped to one category.
    ///
    /// A blank query is a policy branch, not "match everything": with a
    /// category it returns exactly that category's items, otherwise nothing.
    /// Non-blank queries go through the cache keyed on the normalized text
    /// plus the category scope.
    pub fn search_items(&self, query: &str, category_id: Option<&str>) -> Vec<Item> {
        let normalized = query.trim().to_lowercase();
        if normalized.is_empty() {
            return match category_id {
                Some(category_id) => self.get_items_by_category(category_id),
                None => Vec::new(),
            };
        }

        let key = CacheKey {
            query: normalized.clone(),
            category_id: category_id.map(str::to_string),
        };
        self.cache.get_or_compute(key, || {
            engine::execute(&self.store, self.index(), &normalized, category_id)
        })
    }

    /// Resolves [`POPULAR_ITEM_IDS`] in curated order, skipping ids absent
    /// from the catalog, truncated to `limit`.
    pub fn get_popular_items(&self, limit: usize) -> Vec<Item> {
        POPULAR_ITEM_IDS
            .iter()
            .filter_map(|id| self.store.get_item(id).cloned())
            .take(limit)
            .collect()
    }

    /// Batch category listing: one entry per requested id, empty for
    /// unknown categories.
    pub fn get_items_by_categories(&self, category_ids: &[String]) -> HashMap<String, Vec<Item>> {
        category_ids
            .iter()
            .map(|id| (id.clone(), self.get_items_by_category(id)))
            .collect()
    }

    /// Item count per category id.
    pub fn get_category_stats(&self) -> HashMap<String, usize> {
        self.index()
            .category_index()
            .iter()
            .map(|(id, item_ids)| (id.clone(), item_ids.len()))
            .collect()
    }

    pub fn validate_data(&self) -> ValidationReport {
        self.store.validate()
    }

    /// Drops every cached search result; returns the number of entries
    /// removed.
    pub fn clear_search_cache(&self) -> usize {
        self.cache.clear()
    }

    pub fn cached_search_count(&self) -> usize {
        self.cache.len()
    }

    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary {
            version: self.store.version().to_string(),
            last_updated: self.store.last_updated().to_string(),
            category_count: self.store.category_count(),
            item_count: self.store.item_count(),
        }
    }
}
