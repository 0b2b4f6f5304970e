use axum::{
    Router,
    extract::Extension,
    routing::{get, post},
};
use grocery_catalog::catalog::handlers::{
    handle_batch_category_items, handle_get_all_items, handle_get_categories,
    handle_get_category_items, handle_get_info, handle_get_item, handle_get_popular,
    handle_get_stats, handle_validate,
};
use grocery_catalog::catalog::service::CatalogService;
use grocery_catalog::catalog::store::CatalogStore;
use grocery_catalog::search::handlers::{handle_clear_cache, handle_search};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: Option<SocketAddr> = None;
    let mut data_path: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = Some(args[i + 1].parse()?);
                i += 2;
            }
            "--data" => {
                data_path = Some(PathBuf::from(&args[i + 1]));
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    let Some(bind_addr) = bind_addr else {
        eprintln!("Usage: {} --bind <addr:port> [--data <catalog.json>]", args[0]);
        eprintln!("Example: {} --bind 127.0.0.1:6000", args[0]);
        eprintln!(
            "Example: {} --bind 127.0.0.1:6000 --data data/catalog.json",
            args[0]
        );
        std::process::exit(1);
    };

    // 1. Catalog data:
    let store = match &data_path {
        Some(path) => CatalogStore::load_path(path)?,
        None => CatalogStore::builtin()?,
    };

    let service = Arc::new(CatalogService::new(store));
    let summary = service.summary();
    tracing::info!(
        "Serving catalog {} (updated {}): {} categories, {} items",
        summary.version,
        summary.last_updated,
        summary.category_count,
        summary.item_count
    );

    // 2. Startup health check. Findings are logged, not fatal: the engine
    //    stays up with a known-bad catalog and /validate reports the details.
    let report = service.validate_data();
    if report.is_valid {
        tracing::info!("Catalog validation passed");
    } else {
        for error in &report.errors {
            tracing::warn!("Catalog validation: {}", error);
        }
    }

    // 3. Index build (eager, so the first query doesn't pay for it):
    service.ensure_index();

    // 4. HTTP Router:
    let app = Router::new()
        .route("/info", get(handle_get_info))
        .route("/categories", get(handle_get_categories))
        .route("/categories/:id/items", get(handle_get_category_items))
        .route("/categories/items", post(handle_batch_category_items))
        .route("/stats", get(handle_get_stats))
        .route("/items", get(handle_get_all_items))
        .route("/items/:id", get(handle_get_item))
        .route("/popular", get(handle_get_popular))
        .route("/search", get(handle_search))
        .route("/search/cache/clear", post(handle_clear_cache))
        .route("/validate", get(handle_validate))
        .layer(Extension(service));

    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
