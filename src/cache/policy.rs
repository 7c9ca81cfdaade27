//! Eviction Policy Module
//!
//! Names the available eviction policies and provides the factory that
//! maps a policy plus a capacity to a constructed cache instance.

use std::hash::Hash;
use std::str::FromStr;

use crate::cache::{Cache, LruCache};
use crate::error::{CacheError, Result};

// == Eviction Policy ==
/// The eviction policies a cache can be constructed with.
///
/// LRU is the only policy implemented today; FIFO, LFU and TTL variants
/// slot in here as further implementations of [`Cache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvictionPolicy {
    /// Evict the least recently used entry on overflow
    Lru,
}

impl FromStr for EvictionPolicy {
    type Err = CacheError;

    /// Parses a policy name, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "lru" => Ok(EvictionPolicy::Lru),
            _ => Err(CacheError::UnknownPolicy(s.to_string())),
        }
    }
}

// == Factory ==
/// Constructs a cache for the given policy and capacity.
///
/// # Arguments
/// * `policy` - Which eviction policy the cache should use
/// * `capacity` - Maximum number of entries the cache can hold
///
/// # Errors
/// Returns [`CacheError::InvalidCapacity`] when `capacity` is zero.
pub fn new_cache<K, V>(policy: EvictionPolicy, capacity: usize) -> Result<Box<dyn Cache<K, V>>>
where
    K: Eq + Hash + Clone + 'static,
    V: 'static,
{
    match policy {
        EvictionPolicy::Lru => Ok(Box::new(LruCache::new(capacity)?)),
    }
}
