use super::index::CatalogIndex;
use super::tokenizer::tokenize_query;
use crate::catalog::store::CatalogStore;
use crate::catalog::types::Item;
use std::collections::HashSet;

/// Hard cap on the number of results a single query returns.
pub const RESULT_LIMIT: usize = 20;

/// Evaluates a non-blank query against the index.
///
/// Per term, exact postings and prefix postings are unioned; terms are then
/// unioned with each other (OR semantics: an item matches if it matches any
/// term, deliberately not all of them). Ids that no longer resolve in the
/// store are dropped. Results are ranked and capped at [`RESULT_LIMIT`].
pub fn execute(
    store: &CatalogStore,
    index: &CatalogIndex,
    query: &str,
    category_id: Option<&str>,
) -> Vec<Item> {
    let terms = tokenize_query(query);
    if terms.is_empty() {
        return Vec::new();
    }

    let mut matched: HashSet<String> = HashSet::new();
    for term in &terms {
        if let Some(posting) = index.exact_matches(term) {
            matched.extend(posting.iter().cloned());
        }
        matched.extend(index.prefix_matches(term));
    }

    let mut items: Vec<Item> = matched
        .iter()
        .filter_map(|id| store.get_item(id).cloned())
        .collect();

    if let Some(category_id) = category_id {
        items.retain(|item| item.category_id == category_id);
    }

    rank(&mut items, query);
    items.truncate(RESULT_LIMIT);
    items
}

/// Orders results by relevance.
///
/// Items whose name contains the full query as a substring
/// (case-insensitive) come first; each bucket is sorted alphabetically on
/// the lowercased name, with the id as final tie-break so the order is a
/// total order for any fixed catalog and query.
pub fn rank(items: &mut [Item], query: &str) {
    let needle = query.trim().to_lowercase();
    items.sort_by(|a, b| {
        let a_name = a.name.to_lowercase();
        let b_name = b.name.to_lowercase();
        let a_contains = a_name.contains(&needle);
        let b_contains = b_name.contains(&needle);
        b_contains
            .cmp(&a_contains)
            .then_with(|| a_name.cmp(&b_name))
            .then_with(|| a.id.cmp(&b.id))
    });
}
