//! Configuration Module
//!
//! Handles loading the demo binary's configuration from environment
//! variables.

use std::env;

/// Demo configuration parameters.
///
/// All values can be configured via environment variables with sensible
/// defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub capacity: usize,
    /// Name of the eviction policy to construct
    pub policy: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cache entries (default: 3)
    /// - `CACHE_POLICY` - Eviction policy name (default: "lru")
    pub fn from_env() -> Self {
        Self {
            capacity: env::var("CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3),
            policy: env::var("CACHE_POLICY").unwrap_or_else(|_| "lru".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: 3,
            policy: "lru".to_string(),
        }
    }
}
