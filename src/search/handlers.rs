use crate::catalog::service::CatalogService;
use crate::catalog::types::Item;
use axum::extract::Query;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Query text. Missing or blank is the defined empty-query policy, not
    /// an error.
    pub q: Option<String>,
    pub category: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub query: String,
    pub category: Option<String>,
    pub total_count: usize,
    pub count: usize,
    pub results: Vec<Item>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClearCacheResponse {
    pub cleared: usize,
}

pub async fn handle_search(
    Query(params): Query<SearchParams>,
    Extension(service): Extension<Arc<CatalogService>>,
) -> Json<SearchResponse> {
    let query = params.q.unwrap_or_default();
    let results = service.search_items(&query, params.category.as_deref());

    let total_count = results.len();
    let offset = params.offset.unwrap_or(0);
    let limit = params.limit.unwrap_or(total_count);
    let results: Vec<Item> = results.into_iter().skip(offset).take(limit).collect();

    Json(SearchResponse {
        query,
        category: params.category,
        total_count,
        count: results.len(),
        results,
    })
}

pub async fn handle_clear_cache(
    Extension(service): Extension<Arc<CatalogService>>,
) -> Json<ClearCacheResponse> {
    let cleared = service.clear_search_cache();
    tracing::debug!("Search cache cleared ({} entries dropped)", cleared);
    Json(ClearCacheResponse { cleared })
}
