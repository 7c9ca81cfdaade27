//! Error types for the cache library
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache library.
///
/// Lookup misses are not errors: `get` and `remove` report absence
/// through `Option`, so the only failures are construction-time ones.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Requested capacity is not a positive integer
    #[error("Invalid capacity: {0} (must be at least 1)")]
    InvalidCapacity(usize),

    /// Eviction policy name not recognized by the factory
    #[error("Unknown eviction policy: {0}")]
    UnknownPolicy(String),
}

// == Result Type Alias ==
/// Convenience Result type for the cache library.
pub type Result<T> = std::result::Result<T, CacheError>;

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_capacity_message() {
        let err = CacheError::InvalidCapacity(0);
        assert_eq!(err.to_string(), "Invalid capacity: 0 (must be at least 1)");
    }

    #[test]
    fn test_unknown_policy_message() {
        let err = CacheError::UnknownPolicy("lfu".to_string());
        assert_eq!(err.to_string(), "Unknown eviction policy: lfu");
    }
}
