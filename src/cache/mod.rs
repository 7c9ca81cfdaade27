//! Cache Module
//!
//! Provides a generic bounded cache contract and an LRU implementation.

mod bounded;
mod lru;
mod policy;


// Re-export public types
pub use bounded::{Bounded, Capacity};
pub use lru::LruCache;
pub use policy::{new_cache, EvictionPolicy};

// == Cache Contract ==
/// Generic cache with key-value pair entries.
///
/// Implementations are polymorphic over the eviction policy; construct
/// them through [`new_cache`] or their own constructors. Absent keys are
/// reported as `None`, never as errors.
pub trait Cache<K, V> {
    /// Unconditionally inserts a key-value pair into the cache,
    /// overriding any existing entry with the same key.
    ///
    /// The inserted key becomes the most recently used. Implementations
    /// at capacity evict an entry of their choosing to make room.
    fn put(&mut self, key: K, value: V);

    /// Retrieves the value associated with the given key.
    ///
    /// A successful lookup counts as a use: the key is promoted to most
    /// recently used. Returns `None` if the key is absent, with no
    /// side effects.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Removes the entry for the specified key if it is present.
    ///
    /// Returns the value that was stored, transferring ownership to the
    /// caller, or `None` if the key was absent.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Returns the number of entries currently in the cache.
    fn len(&self) -> usize;

    /// Returns true if the cache holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
