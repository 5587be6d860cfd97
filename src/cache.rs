//! Lookup cache in front of a suffix list.

use std::borrow::Cow;
use std::num::NonZeroUsize;

use lru::LruCache;
use parking_lot::Mutex;
use tracing::trace;

use crate::list::{List, SuffixFinder};
use crate::rule::Rule;
use crate::types::FindOptions;

/// Default LRU cache size
pub const DEFAULT_CACHE_SIZE: usize = 1024;

/// Cache key for the LRU cache
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    name: String,
    ignore_private: bool,
}

/// Suffix list with an LRU cache of rule lookups.
///
/// Returns the same rules as [`List::find`].
pub struct CachedList {
    list: List,
    cache: Mutex<LruCache<CacheKey, Rule>>,
}

impl CachedList {
    /// Wrap a list with a cache of `cache_size` entries (at least one).
    pub fn new(list: List, cache_size: usize) -> Self {
        let cache_size = NonZeroUsize::new(cache_size).unwrap_or(NonZeroUsize::MIN);
        Self {
            list,
            cache: Mutex::new(LruCache::new(cache_size)),
        }
    }

    /// Find the governing rule, consulting the cache first.
    pub fn find(&self, name: &str, options: &FindOptions) -> Rule {
        let key = CacheKey {
            name: name.to_string(),
            ignore_private: options.ignore_private,
        };

        let mut cache = self.cache.lock();

        if let Some(rule) = cache.get(&key) {
            return rule.clone();
        }

        // Cache miss: the scan is CPU-only, so it runs under the lock.
        trace!(name, "suffix rule cache miss");
        let rule = self.list.find(name, options).clone();
        cache.put(key, rule.clone());

        rule
    }

    /// The wrapped list.
    pub fn list(&self) -> &List {
        &self.list
    }

    /// Number of cached lookups
    pub fn cached_len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Clear the cache
    pub fn clear_cache(&self) {
        let mut cache = self.cache.lock();
        cache.clear();
    }
}

impl SuffixFinder for CachedList {
    fn find_rule(&self, name: &str, options: &FindOptions) -> Cow<'_, Rule> {
        Cow::Owned(self.find(name, options))
    }
}

impl std::fmt::Debug for CachedList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedList")
            .field("rules", &self.list.len())
            .field("cached", &self.cached_len())
            .finish()
    }
}
