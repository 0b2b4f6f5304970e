//! Grocery Catalog Search Engine Library
//!
//! This library crate defines the modules behind the catalog service binary
//! (`main.rs`): a tokenized inverted index over a fixed grocery catalog with
//! ranked multi-term search and a read-only query API.
//!
//! ## Architecture Modules
//! - **`catalog`**: The canonical data layer. Loads the versioned catalog
//!   document, holds items and categories immutably, validates structure,
//!   and exposes the read facade (`CatalogService`).
//! - **`search`**: The information retrieval logic. Tokenizer, one-time
//!   inverted index build, exact/prefix query evaluation with OR semantics,
//!   substring-first relevance ranking, and the bounded result cache.

pub mod catalog;
pub mod search;
