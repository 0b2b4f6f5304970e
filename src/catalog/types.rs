use serde::{Deserialize, Serialize};

/// A single purchasable item in the catalog.
///
/// Items are immutable after load and owned exclusively by the `CatalogStore`.
/// The wire/on-disk representation uses camelCase, with `categoryId` carried
/// under the `category` key to match the catalog document format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub name: String,
    pub icon: String,
    #[serde(rename = "category")]
    pub category_id: String,
    pub default_unit: String,
    pub common_units: Vec<String>,
}

/// A browsing category.
///
/// `item_ids` is derived state: it is materialized from the category index
/// when categories are served, never authored in the dataset (the document
/// format nests items under their category instead).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
    #[serde(default)]
    pub item_ids: Vec<String>,
}

/// The versioned on-disk catalog document.
///
/// ```json
/// { "version": "1.4.0", "lastUpdated": "2025-11-04T09:30:00Z",
///   "categories": [ { "id", "name", "icon", "items": [ ... ] } ] }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFile {
    pub version: String,
    pub last_updated: String,
    pub categories: Vec<CategoryEntry>,
}

/// One category block of the catalog document, with its items nested inline.
///
/// Each nested item's `category` field is expected to equal the enclosing
/// category's `id`; a mismatch is reported by validation rather than
/// rejected at parse time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub items: Vec<Item>,
}

/// Structural integrity report for a loaded catalog.
///
/// This is the only place data problems surface. The store stays fully
/// queryable with a known-bad catalog; callers (typically a startup health
/// check) decide whether a non-empty `errors` list is fatal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

/// Dataset metadata and headline counts, served by `/info` and logged at
/// startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSummary {
    pub version: String,
    pub last_updated: String,
    pub category_count: usize,
    pub item_count: usize,
}
