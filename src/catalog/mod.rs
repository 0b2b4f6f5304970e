//! Catalog Module
//!
//! The canonical data layer: the immutable set of grocery items and
//! categories, and the public read API composed on top of it.
//!
//! ## Overview
//! The catalog is a static, build-time dataset. It is loaded once (from the
//! embedded document or a `--data` file), validated structurally, and served
//! read-only for the lifetime of the process. There is no update or delete
//! path.
//!
//! ## Responsibilities
//! - **Data model**: closed, versioned record types for items, categories,
//!   and the on-disk document format.
//! - **Store**: id-keyed O(1) lookups over the loaded data plus the
//!   structural validation report.
//! - **Facade**: `CatalogService`, the dependency-injected engine object the
//!   rest of the application consumes (search, category listing, id lookup,
//!   popular items, stats).
//!
//! ## Submodules
//! - **`types`**: Item/Category records, the catalog document, DTO-shaped
//!   reports.
//! - **`store`**: Loading and holding the canonical data.
//! - **`service`**: The read facade wiring store, index, and cache together.
//! - **`handlers`**: HTTP request handlers for the Axum web server.

pub mod handlers;
pub mod service;
pub mod store;
pub mod types;

#[cfg(test)]
mod tests;
