use super::service::CatalogService;
use super::types::{CatalogSummary, Category, Item, ValidationReport};
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Serialize, Deserialize)]
pub struct ItemLookupResponse {
    /// The item, or `None` when the id is unknown (paired with a 404).
    pub item: Option<Item>,
}

#[derive(Debug, Deserialize)]
pub struct PopularParams {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBatchRequest {
    pub category_ids: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryBatchResponse {
    pub categories: HashMap<String, Vec<Item>>,
}

pub async fn handle_get_info(
    Extension(service): Extension<Arc<CatalogService>>,
) -> Json<CatalogSummary> {
    Json(service.summary())
}

pub async fn handle_get_categories(
    Extension(service): Extension<Arc<CatalogService>>,
) -> Json<Vec<Category>> {
    Json(service.get_categories())
}

pub async fn handle_get_category_items(
    Path(category_id): Path<String>,
    Extension(service): Extension<Arc<CatalogService>>,
) -> Json<Vec<Item>> {
    Json(service.get_items_by_category(&category_id))
}

pub async fn handle_get_item(
    Path(item_id): Path<String>,
    Extension(service): Extension<Arc<CatalogService>>,
) -> (StatusCode, Json<ItemLookupResponse>) {
    match service.get_item_by_id(&item_id) {
        Some(item) => (
            StatusCode::OK,
            Json(ItemLookupResponse {
                item: Some(item.clone()),
            }),
        ),
        None => (StatusCode::NOT_FOUND, Json(ItemLookupResponse { item: None })),
    }
}

pub async fn handle_get_all_items(
    Extension(service): Extension<Arc<CatalogService>>,
) -> Json<Vec<Item>> {
    Json(service.get_all_items())
}

pub async fn handle_get_popular(
    Query(params): Query<PopularParams>,
    Extension(service): Extension<Arc<CatalogService>>,
) -> Json<Vec<Item>> {
    let limit = params.limit.unwrap_or(8);
    Json(service.get_popular_items(limit))
}

pub async fn handle_get_stats(
    Extension(service): Extension<Arc<CatalogService>>,
) -> Json<HashMap<String, usize>> {
    Json(service.get_category_stats())
}

pub async fn handle_batch_category_items(
    Extension(service): Extension<Arc<CatalogService>>,
    Json(req): Json<CategoryBatchRequest>,
) -> Json<CategoryBatchResponse> {
    Json(CategoryBatchResponse {
        categories: service.get_items_by_categories(&req.category_ids),
    })
}

pub async fn handle_validate(
    Extension(service): Extension<Arc<CatalogService>>,
) -> Json<ValidationReport> {
    let report = service.validate_data();
    if !report.is_valid {
        tracing::warn!("Catalog validation found {} errors", report.errors.len());
    }
    Json(report)
}
