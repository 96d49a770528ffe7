//! # Segment Cache

use std::sync::Arc;

use parking_lot::RwLock;

use crate::types::{Symbol, WMBuildHasher, WMHashMap};

/// The default number of cache shards.
pub const DEFAULT_CACHE_SHARDS: usize = 16;

/// A resolved subword sequence.
pub type Subwords = Arc<[Symbol]>;

/// Raw word -> resolved subwords cache.
///
/// Owned by a single encoder; grows monotonically and is never invalidated.
/// Entries are sharded by key hash, each shard behind its own lock,
/// so one encoder can be shared across threads.
#[derive(Debug)]
pub struct SegmentCache {
    shards: Vec<RwLock<WMHashMap<String, Subwords>>>,
    hasher: WMBuildHasher,
}

impl Default for SegmentCache {
    fn default() -> Self {
        Self::with_shards(DEFAULT_CACHE_SHARDS)
    }
}

impl SegmentCache {
    /// Create a new cache with `shards` shards (at least one).
    pub fn with_shards(shards: usize) -> Self {
        Self {
            shards: (0..shards.max(1))
                .map(|_| RwLock::new(WMHashMap::default()))
                .collect(),
            hasher: WMBuildHasher::default(),
        }
    }

    fn shard(
        &self,
        key: &str,
    ) -> &RwLock<WMHashMap<String, Subwords>> {
        let idx = (self.hasher.hash_one(key) as usize) % self.shards.len();
        &self.shards[idx]
    }

    /// Look up a cached entry.
    pub fn get(
        &self,
        key: &str,
    ) -> Option<Subwords> {
        self.shard(key).read().get(key).cloned()
    }

    /// Insert an entry; an existing entry for `key` is kept.
    ///
    /// ## Returns
    /// The entry now cached for `key`.
    pub fn insert(
        &self,
        key: &str,
        value: Subwords,
    ) -> Subwords {
        self.shard(key)
            .write()
            .entry(key.to_string())
            .or_insert(value)
            .clone()
    }

    /// Look up `key`, computing and caching it on a miss.
    ///
    /// The computation runs without holding any lock.
    pub fn get_or_insert_with<F>(
        &self,
        key: &str,
        compute: F,
    ) -> Subwords
    where
        F: FnOnce() -> Subwords,
    {
        if let Some(hit) = self.get(key) {
            return hit;
        }
        self.insert(key, compute())
    }

    /// The number of cached entries.
    pub fn len(&self) -> usize {
        self.shards.iter().map(|s| s.read().len()).sum()
    }

    /// Is the cache empty?
    pub fn is_empty(&self) -> bool {
        self.shards.iter().all(|s| s.read().is_empty())
    }
}
