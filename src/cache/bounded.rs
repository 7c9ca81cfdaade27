//! Bounded Cache Module
//!
//! Capacity validation and the bounded-cache contract shared by all
//! eviction policy implementations.

use crate::error::{CacheError, Result};

// == Capacity ==
/// A validated, immutable cache capacity.
///
/// Constructed only through [`Capacity::new`], so holding a `Capacity`
/// is proof the value is at least 1. Cache constructors validate their
/// capacity argument through this type before building internal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacity(usize);

impl Capacity {
    // == Constructor ==
    /// Validates and wraps a raw capacity value.
    ///
    /// # Arguments
    /// * `raw` - Maximum number of entries the cache may hold
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidCapacity`] when `raw` is zero.
    pub fn new(raw: usize) -> Result<Self> {
        if raw == 0 {
            return Err(CacheError::InvalidCapacity(raw));
        }
        Ok(Self(raw))
    }

    // == Get ==
    /// Returns the configured capacity.
    pub fn get(&self) -> usize {
        self.0
    }
}

// == Bounded Contract ==
/// A cache with a fixed maximum number of entries.
pub trait Bounded {
    /// Returns the maximum number of entries the cache can hold.
    fn capacity(&self) -> usize;
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_zero_rejected() {
        let result = Capacity::new(0);
        assert_eq!(result, Err(CacheError::InvalidCapacity(0)));
    }

    #[test]
    fn test_capacity_one_accepted() {
        let capacity = Capacity::new(1).unwrap();
        assert_eq!(capacity.get(), 1);
    }

    #[test]
    fn test_capacity_large_accepted() {
        let capacity = Capacity::new(usize::MAX).unwrap();
        assert_eq!(capacity.get(), usize::MAX);
    }
}
