//! Bounded Cache - A fixed-capacity in-memory key-value cache
//!
//! Provides a generic cache contract with pluggable eviction policies
//! and an LRU implementation with O(1) operations.

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{new_cache, Bounded, Cache, Capacity, EvictionPolicy, LruCache};
pub use config::Config;
pub use error::{CacheError, Result};
