//! Content-addressed memoization for pipeline stages
//!
//! Each stage's result is stored in a bounded in-memory LRU cache keyed by a
//! SHA-256 hash of the stage's input. Two runs over byte-identical inputs hit
//! the same entry; any change to the input produces a new key. Caches are
//! owned by whoever runs the pipeline and passed in, never held globally.

use lru::LruCache;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::{
    fmt,
    num::NonZeroUsize,
    sync::{Mutex, MutexGuard},
};

use crate::error::{Result, StatsError};

/// SHA-256 digest identifying a stage input.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentHash([u8; 32]);

impl ContentHash {
    /// Hash raw bytes, e.g. an input file's contents.
    pub fn of_bytes(bytes: &[u8]) -> Self {
        Self(Sha256::digest(bytes).into())
    }

    /// Hash a value through its JSON serialization.
    pub fn of<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        let bytes = serde_json::to_vec(value)?;
        Ok(Self::of_bytes(&bytes))
    }

    /// Combine several hashes into one, order-sensitive.
    pub fn combine(parts: &[ContentHash]) -> Self {
        let mut hasher = Sha256::new();
        for part in parts {
            hasher.update(part.0);
        }
        Self(hasher.finalize().into())
    }

    /// Short hex prefix for log lines.
    pub fn short(&self) -> String {
        self.0[..6].iter().map(|b| format!("{:02x}", b)).collect()
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl fmt::Debug for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentHash({})", self.short())
    }
}

/// Hit/miss counters and occupancy of a [`MemoCache`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub len: usize,
    pub capacity: usize,
}

struct Inner<V> {
    entries: LruCache<ContentHash, V>,
    hits: u64,
    misses: u64,
}

/// Bounded LRU memo table keyed by [`ContentHash`].
pub struct MemoCache<V: Clone> {
    name: &'static str,
    inner: Mutex<Inner<V>>,
    capacity: usize,
}

impl<V: Clone> MemoCache<V> {
    /// Create a cache holding at most `capacity` entries (minimum 1).
    pub fn new(name: &'static str, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let size = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            name,
            inner: Mutex::new(Inner {
                entries: LruCache::new(size),
                hits: 0,
                misses: 0,
            }),
            capacity,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner<V>>> {
        self.inner.lock().map_err(|_| StatsError::Cache {
            message: format!("{} cache lock poisoned", self.name),
        })
    }

    /// Look up a value, counting the hit or miss.
    pub fn get(&self, key: &ContentHash) -> Result<Option<V>> {
        let mut inner = self.lock()?;
        let found = inner.entries.get(key).cloned();
        if found.is_some() {
            inner.hits += 1;
        } else {
            inner.misses += 1;
        }
        Ok(found)
    }

    pub fn put(&self, key: ContentHash, value: V) -> Result<()> {
        self.lock()?.entries.put(key, value);
        Ok(())
    }

    /// Return the cached value for `key`, or compute, store and return it.
    ///
    /// A failed computation is not cached.
    pub fn get_or_try_insert_with<F>(&self, key: ContentHash, compute: F) -> Result<V>
    where
        F: FnOnce() -> Result<V>,
    {
        if let Some(value) = self.get(&key)? {
            log::debug!("{} cache hit ({})", self.name, key.short());
            return Ok(value);
        }

        log::debug!("{} cache miss ({}), computing", self.name, key.short());
        let value = compute()?;
        self.put(key, value.clone())?;
        Ok(value)
    }

    /// Drop every entry; counters are kept.
    pub fn clear(&self) -> Result<()> {
        self.lock()?.entries.clear();
        Ok(())
    }

    pub fn stats(&self) -> Result<CacheStats> {
        let inner = self.lock()?;
        Ok(CacheStats {
            hits: inner.hits,
            misses: inner.misses,
            len: inner.entries.len(),
            capacity: self.capacity,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}
