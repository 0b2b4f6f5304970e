use crate::catalog::types::Item;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Mutex;

/// Default number of cached queries.
pub const DEFAULT_CAPACITY: usize = 256;

/// Cache key: the normalized (lowercased, trimmed) query text plus the
/// category scope. Folding the category in keeps scoped and unscoped
/// searches for the same text from sharing an entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub query: String,
    pub category_id: Option<String>,
}

/// Memoizes ranked, capped search results.
///
/// LRU-bounded, so repeated keystroke queries stay warm without the map
/// growing with every distinct search ever made. The catalog is immutable
/// for the process lifetime, so entries never go stale; `clear` is the only
/// invalidation path. A single mutex guards read-compute-insert: a race
/// would at worst recompute an identical value.
pub struct SearchCache {
    entries: Mutex<LruCache<CacheKey, Vec<Item>>>,
}

impl SearchCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).unwrap();
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn get_or_compute<F>(&self, key: CacheKey, compute: F) -> Vec<Item>
    where
        F: FnOnce() -> Vec<Item>,
    {
        let mut entries = self.entries.lock().unwrap();
        if let Some(hit) = entries.get(&key) {
            return hit.clone();
        }
        let results = compute();
        entries.put(key, results.clone());
        results
    }

    /// Drops every entry, returning how many were cached.
    pub fn clear(&self) -> usize {
        let mut entries = self.entries.lock().unwrap();
        let cleared = entries.len();
        entries.clear();
        cleared
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SearchCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
