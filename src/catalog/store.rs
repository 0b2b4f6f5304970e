use super::types::{CatalogFile, Category, Item, ValidationReport};
use anyhow::{Context, Result};
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Default dataset compiled into the binary. A `--data` file overrides it.
const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

/// Holds the canonical, immutable set of items and categories.
///
/// The store is built once from a catalog document and never mutated. Items
/// and categories keep their document order; id lookups are O(1). When the
/// document contains duplicate ids, the first occurrence wins the lookup slot
/// and the duplicate is reported by [`CatalogStore::validate`].
pub struct CatalogStore {
    version: String,
    last_updated: String,
    items: Vec<Item>,
    item_lookup: HashMap<String, usize>,
    categories: Vec<Category>,
    category_lookup: HashMap<String, usize>,
    load_findings: Vec<String>,
}

impl CatalogStore {
    pub fn from_file(file: CatalogFile) -> Self {
        let mut items = Vec::new();
        let mut item_lookup = HashMap::new();
        let mut categories = Vec::new();
        let mut category_lookup = HashMap::new();
        let mut load_findings = Vec::new();

        for entry in file.categories {
            if !category_lookup.contains_key(&entry.id) {
                category_lookup.insert(entry.id.clone(), categories.len());
            } else {
                load_findings.push(format!("duplicate category id: {}", entry.id));
            }
            categories.push(Category {
                id: entry.id.clone(),
                name: entry.name,
                icon: entry.icon,
                item_ids: Vec::new(),
            });

            for item in entry.items {
                if item.category_id != entry.id {
                    load_findings.push(format!(
                        "item {} is nested under category {} but declares category {}",
                        item.id, entry.id, item.category_id
                    ));
                }
                if !item_lookup.contains_key(&item.id) {
                    item_lookup.insert(item.id.clone(), items.len());
                }
                items.push(item);
            }
        }

        Self {
            version: file.version,
            last_updated: file.last_updated,
            items,
            item_lookup,
            categories,
            category_lookup,
            load_findings,
        }
    }

    pub fn load_json(json: &str) -> Result<Self> {
        let file: CatalogFile =
            serde_json::from_str(json).context("Failed to parse catalog document")?;
        Ok(Self::from_file(file))
    }

    pub fn load_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
        let store = Self::load_json(&json)?;
        tracing::info!(
            "Loaded catalog {} ({} categories, {} items) from {}",
            store.version,
            store.categories.len(),
            store.items.len(),
            path.display()
        );
        Ok(store)
    }

    /// Loads the dataset embedded at compile time.
    pub fn builtin() -> Result<Self> {
        Self::load_json(BUILTIN_CATALOG)
    }

    pub fn get_item(&self, item_id: &str) -> Option<&Item> {
        self.item_lookup.get(item_id).map(|&idx| &self.items[idx])
    }

    pub fn get_category(&self, category_id: &str) -> Option<&Category> {
        self.category_lookup
            .get(category_id)
            .map(|&idx| &self.categories[idx])
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn last_updated(&self) -> &str {
        &self.last_updated
    }

    /// Checks the structural integrity of the loaded catalog.
    ///
    /// Findings: duplicate item ids, missing required fields (id, name, icon;
    /// items additionally need a category), references to unknown categories,
    /// and categories that own no items. Always returns a report, never
    /// fails; a broken catalog remains queryable.
    pub fn validate(&self) -> ValidationReport {
        let mut errors = self.load_findings.clone();

        let mut seen_ids: HashSet<&str> = HashSet::new();
        for item in &self.items {
            if !seen_ids.insert(item.id.as_str()) {
                errors.push(format!("duplicate item id: {}", item.id));
            }
            if item.id.is_empty() {
                errors.push(format!("item \"{}\" has an empty id", item.name));
            }
            if item.name.is_empty() {
                errors.push(format!("item {} is missing a name", item.id));
            }
            if item.icon.is_empty() {
                errors.push(format!("item {} is missing an icon", item.id));
            }
            if item.category_id.is_empty() {
                errors.push(format!("item {} is missing a category", item.id));
            } else if !self.category_lookup.contains_key(&item.category_id) {
                errors.push(format!(
                    "item {} references unknown category {}",
                    item.id, item.category_id
                ));
            }
        }

        for category in &self.categories {
            if category.id.is_empty() {
                errors.push(format!("category \"{}\" has an empty id", category.name));
            }
            if category.name.is_empty() {
                errors.push(format!("category {} is missing a name", category.id));
            }
            if category.icon.is_empty() {
                errors.push(format!("category {} is missing an icon", category.id));
            }
            let has_items = self
                .items
                .iter()
                .any(|item| item.category_id == category.id);
            if !has_items {
                errors.push(format!("category {} has no items", category.id));
            }
        }

        ValidationReport {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}
