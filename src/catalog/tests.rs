//! Catalog Module Tests
//!
//! Validates the data layer and the read facade.
//!
//! ## Test Scopes
//! - **Store**: Document loading, id lookups, structural validation.
//! - **Service**: Category listing, blank-query policy, popular items,
//!   batch reads, stats, cache reset.
//! - **Dataset**: The embedded catalog parses and validates cleanly.
//! - **Serialization**: JSON compatibility for API types.

#[cfg(test)]
mod tests {
    use crate::catalog::service::{CatalogService, POPULAR_ITEM_IDS};
    use crate::catalog::store::CatalogStore;
    use crate::catalog::types::{CatalogFile, Category, CategoryEntry, Item, ValidationReport};
    use std::collections::HashSet;

    fn item(id: &str, name: &str, category: &str) -> Item {
        Item {
            id: id.to_string(),
            name: name.to_string(),
            icon: "🛒".to_string(),
            category_id: category.to_string(),
            default_unit: "pcs".to_string(),
            common_units: vec!["pcs".to_string()],
        }
    }

    fn entry(id: &str, name: &str, items: Vec<Item>) -> CategoryEntry {
        CategoryEntry {
            id: id.to_string(),
            name: name.to_string(),
            icon: "🛒".to_string(),
            items,
        }
    }

    fn test_file(categories: Vec<CategoryEntry>) -> CatalogFile {
        CatalogFile {
            version: "0.0.1-test".to_string(),
            last_updated: "2025-01-01T00:00:00Z".to_string(),
            categories,
        }
    }

    fn test_store() -> CatalogStore {
        CatalogStore::from_file(test_file(vec![
            entry(
                "dairy",
                "Dairy & Eggs",
                vec![
                    item("whole_milk", "Whole Milk", "dairy"),
                    item("eggs", "Eggs", "dairy"),
                ],
            ),
            entry(
                "produce",
                "Produce",
                vec![
                    item("bananas", "Bananas", "produce"),
                    item("green_beans", "Green Beans", "produce"),
                    item("apples", "Apples", "produce"),
                ],
            ),
        ]))
    }

    // ============================================================
    // STORE TESTS - loading and lookups
    // ============================================================

    #[test]
    fn test_store_lookup_consistency() {
        let store = test_store();

        for item in store.items() {
            assert_eq!(store.get_item(&item.id), Some(item));
        }
    }

    #[test]
    fn test_store_unknown_item_is_none() {
        let store = test_store();
        assert!(store.get_item("zucchini").is_none());
    }

    #[test]
    fn test_store_category_lookup() {
        let store = test_store();

        let dairy = store.get_category("dairy").expect("dairy should exist");
        assert_eq!(dairy.name, "Dairy & Eggs");
        assert!(store.get_category("nonexistent").is_none());
    }

    #[test]
    fn test_store_preserves_document_order() {
        let store = test_store();

        let ids: Vec<&str> = store.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["whole_milk", "eggs", "bananas", "green_beans", "apples"]
        );
    }

    #[test]
    fn test_load_json_parses_document() {
        let json = r#"{
            "version": "2.0.0",
            "lastUpdated": "2025-06-01T00:00:00Z",
            "categories": [
                { "id": "dairy", "name": "Dairy", "icon": "🥛", "items": [
                    { "id": "whole_milk", "name": "Whole Milk", "icon": "🥛",
                      "category": "dairy", "defaultUnit": "gallon",
                      "commonUnits": ["gallon", "quart"] }
                ] }
            ]
        }"#;

        let store = CatalogStore::load_json(json).expect("document should parse");

        assert_eq!(store.version(), "2.0.0");
        assert_eq!(store.item_count(), 1);
        let milk = store.get_item("whole_milk").unwrap();
        assert_eq!(milk.default_unit, "gallon");
        assert_eq!(milk.common_units, vec!["gallon", "quart"]);
    }

    #[test]
    fn test_load_json_rejects_malformed() {
        assert!(CatalogStore::load_json("not a catalog").is_err());
        assert!(CatalogStore::load_json("{\"version\": \"1\"}").is_err());
    }

    // ============================================================
    // STORE TESTS - validation
    // ============================================================

    #[test]
    fn test_validation_passes_for_sound_catalog() {
        let report = test_store().validate();

        assert!(report.is_valid);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_validation_flags_duplicate_item_id() {
        let store = CatalogStore::from_file(test_file(vec![entry(
            "dairy",
            "Dairy",
            vec![
                item("whole_milk", "Whole Milk", "dairy"),
                item("whole_milk", "Whole Milk Again", "dairy"),
            ],
        )]));

        let report = store.validate();

        assert!(!report.is_valid);
        assert!(
            report
                .errors
                .iter()
                .any(|e| e.contains("duplicate item id: whole_milk"))
        );
    }

    #[test]
    fn test_validation_flags_missing_fields() {
        let mut broken = item("eggs", "Eggs", "dairy");
        broken.icon = String::new();
        let store = CatalogStore::from_file(test_file(vec![entry("dairy", "Dairy", vec![broken])]));

        let report = store.validate();

        assert!(!report.is_valid);
        assert!(report.errors.iter().any(|e| e.contains("missing an icon")));
    }

    #[test]
    fn test_validation_flags_unknown_category_reference() {
        // The item sits under "produce" but claims a category that does not
        // exist anywhere in the document.
        let store = CatalogStore::from_file(test_file(vec![entry(
            "produce",
            "Produce",
            vec![item("bananas", "Bananas", "tropical")],
        )]));

        let report = store.validate();

        assert!(!report.is_valid);
        assert!(
            report
                .errors
                .iter()
                .any(|e| e.contains("unknown category tropical"))
        );
        // And "produce" ends up with no items of its own.
        assert!(
            report
                .errors
                .iter()
                .any(|e| e.contains("category produce has no items"))
        );
    }

    #[test]
    fn test_validation_flags_empty_category() {
        let store = CatalogStore::from_file(test_file(vec![
            entry("dairy", "Dairy", vec![item("whole_milk", "Whole Milk", "dairy")]),
            entry("frozen", "Frozen", vec![]),
        ]));

        let report = store.validate();

        assert!(!report.is_valid);
        assert!(
            report
                .errors
                .iter()
                .any(|e| e.contains("category frozen has no items"))
        );
    }

    #[test]
    fn test_validation_survives_broken_catalog() {
        // A catalog with findings is still fully queryable.
        let store = CatalogStore::from_file(test_file(vec![entry(
            "produce",
            "Produce",
            vec![item("bananas", "Bananas", "tropical")],
        )]));

        assert!(store.get_item("bananas").is_some());
        assert!(!store.validate().is_valid);
    }

    // ============================================================
    // SERVICE TESTS - category reads
    // ============================================================

    #[test]
    fn test_service_categories_materialize_item_ids() {
        let service = CatalogService::new(test_store());

        let categories = service.get_categories();

        let dairy = categories.iter().find(|c| c.id == "dairy").unwrap();
        assert_eq!(dairy.item_ids, vec!["whole_milk", "eggs"]);
        let produce = categories.iter().find(|c| c.id == "produce").unwrap();
        assert_eq!(produce.item_ids, vec!["bananas", "green_beans", "apples"]);
    }

    #[test]
    fn test_service_items_by_category() {
        let service = CatalogService::new(test_store());

        let items = service.get_items_by_category("produce");
        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();

        assert_eq!(ids, vec!["bananas", "green_beans", "apples"]);
    }

    #[test]
    fn test_service_unknown_category_is_empty() {
        let service = CatalogService::new(test_store());

        assert!(service.get_items_by_category("nonexistent").is_empty());
    }

    #[test]
    fn test_service_all_items_flattened() {
        let service = CatalogService::new(test_store());

        let items = service.get_all_items();

        assert_eq!(items.len(), 5);
        let unique: HashSet<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(unique.len(), 5);
    }

    #[test]
    fn test_service_item_by_id() {
        let service = CatalogService::new(test_store());

        assert_eq!(
            service.get_item_by_id("whole_milk").map(|i| i.name.as_str()),
            Some("Whole Milk")
        );
        assert!(service.get_item_by_id("zucchini").is_none());
    }

    // ============================================================
    // SERVICE TESTS - search policy
    // ============================================================

    #[test]
    fn test_service_blank_query_is_empty() {
        let service = CatalogService::new(test_store());

        assert!(service.search_items("", None).is_empty());
        assert!(service.search_items("   ", None).is_empty());
    }

    #[test]
    fn test_service_blank_query_with_category_lists_category() {
        let service = CatalogService::new(test_store());

        let via_search = service.search_items("", Some("produce"));
        let via_listing = service.get_items_by_category("produce");

        assert_eq!(via_search, via_listing);
    }

    #[test]
    fn test_service_search_scoped_to_category() {
        let service = CatalogService::new(test_store());

        // "whole_milk" and "green_beans" both tokenize to something matching
        // "whole"/"green"; scoping must never leak across categories.
        let results = service.search_items("whole green", Some("dairy"));

        assert!(!results.is_empty());
        for item in &results {
            assert_eq!(item.category_id, "dairy");
        }
    }

    #[test]
    fn test_service_whole_milk_scenario() {
        let service = CatalogService::new(test_store());

        let results = service.search_items("milk", None);

        assert_eq!(results[0].id, "whole_milk");
    }

    #[test]
    fn test_service_search_repeats_consistently() {
        let service = CatalogService::new(test_store());

        let first = service.search_items("ban", None);
        let second = service.search_items("ban", None);

        assert_eq!(first, second);
        assert_eq!(service.cached_search_count(), 1);
    }

    #[test]
    fn test_service_clear_search_cache() {
        let service = CatalogService::new(test_store());

        service.search_items("milk", None);
        service.search_items("eggs", None);

        assert_eq!(service.clear_search_cache(), 2);
        assert_eq!(service.cached_search_count(), 0);
    }

    // ============================================================
    // SERVICE TESTS - popular, batch, stats
    // ============================================================

    #[test]
    fn test_service_popular_skips_missing_ids() {
        // The fixture only carries a few of the curated ids; the rest are
        // skipped without error and order follows the curated list.
        let service = CatalogService::new(test_store());

        let popular = service.get_popular_items(10);
        let ids: Vec<&str> = popular.iter().map(|i| i.id.as_str()).collect();

        assert_eq!(ids, vec!["bananas", "whole_milk", "eggs", "apples"]);
    }

    #[test]
    fn test_service_popular_respects_limit() {
        let service = CatalogService::new(test_store());

        let popular = service.get_popular_items(2);

        assert_eq!(popular.len(), 2);
        assert_eq!(popular[0].id, "bananas");
        assert_eq!(popular[1].id, "whole_milk");
    }

    #[test]
    fn test_service_batch_category_items() {
        let service = CatalogService::new(test_store());

        let batch = service.get_items_by_categories(&[
            "dairy".to_string(),
            "nonexistent".to_string(),
        ]);

        assert_eq!(batch.len(), 2);
        assert_eq!(batch["dairy"].len(), 2);
        assert!(batch["nonexistent"].is_empty());
    }

    #[test]
    fn test_service_category_stats() {
        let service = CatalogService::new(test_store());

        let stats = service.get_category_stats();

        assert_eq!(stats["dairy"], 2);
        assert_eq!(stats["produce"], 3);
    }

    #[test]
    fn test_service_summary() {
        let service = CatalogService::new(test_store());

        let summary = service.summary();

        assert_eq!(summary.version, "0.0.1-test");
        assert_eq!(summary.category_count, 2);
        assert_eq!(summary.item_count, 5);
    }

    #[test]
    fn test_service_validate_round_trip() {
        let service = CatalogService::new(test_store());

        let report = service.validate_data();

        assert!(report.is_valid);
        assert!(report.errors.is_empty());
    }

    // ============================================================
    // EMBEDDED DATASET TESTS
    // ============================================================

    #[test]
    fn test_builtin_catalog_loads() {
        let store = CatalogStore::builtin().expect("embedded catalog should parse");

        assert!(store.category_count() >= 8);
        assert!(store.item_count() >= 50);
    }

    #[test]
    fn test_builtin_catalog_validates_cleanly() {
        let store = CatalogStore::builtin().unwrap();
        let report = store.validate();

        assert!(report.is_valid, "findings: {:?}", report.errors);
    }

    #[test]
    fn test_builtin_catalog_resolves_every_popular_id() {
        let store = CatalogStore::builtin().unwrap();

        for id in POPULAR_ITEM_IDS {
            assert!(store.get_item(id).is_some(), "popular id {} missing", id);
        }
    }

    // ============================================================
    // SERIALIZATION TESTS
    // ============================================================

    #[test]
    fn test_item_serialization() {
        let milk = item("whole_milk", "Whole Milk", "dairy");

        let json = serde_json::to_string(&milk).expect("Serialization failed");

        // Wire casing matches the catalog document format.
        assert!(json.contains("\"category\":\"dairy\""));
        assert!(json.contains("\"defaultUnit\":\"pcs\""));
        assert!(json.contains("\"commonUnits\":[\"pcs\"]"));

        let restored: Item = serde_json::from_str(&json).expect("Deserialization failed");
        assert_eq!(restored, milk);
    }

    #[test]
    fn test_category_serialization() {
        let category = Category {
            id: "dairy".to_string(),
            name: "Dairy & Eggs".to_string(),
            icon: "🥛".to_string(),
            item_ids: vec!["whole_milk".to_string()],
        };

        let json = serde_json::to_string(&category).unwrap();
        assert!(json.contains("\"itemIds\":[\"whole_milk\"]"));

        let restored: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, category);
    }

    #[test]
    fn test_validation_report_serialization() {
        let report = ValidationReport {
            is_valid: false,
            errors: vec!["duplicate item id: eggs".to_string()],
        };

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"isValid\":false"));

        let restored: ValidationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, report);
    }
}
