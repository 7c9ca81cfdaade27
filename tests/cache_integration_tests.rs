//! Integration tests for the bounded cache public API
//!
//! Exercises the crate the way a consumer would: through the policy
//! factory and the `Cache` trait object.

use bounded_cache::{new_cache, Bounded, Cache, CacheError, EvictionPolicy, LruCache};

#[test]
fn test_factory_walkthrough() {
    // The scripted example from the demo binary: one key in, read it
    // back, remove it, size goes 1 -> 0
    let mut cache = new_cache::<String, String>(EvictionPolicy::Lru, 3).unwrap();

    cache.put("key1".to_string(), "value1".to_string());
    assert_eq!(cache.get(&"key1".to_string()), Some(&"value1".to_string()));
    assert_eq!(cache.len(), 1);

    assert_eq!(cache.remove(&"key1".to_string()), Some("value1".to_string()));
    assert_eq!(cache.len(), 0);
}

#[test]
fn test_factory_rejects_zero_capacity() {
    let result = new_cache::<String, String>(EvictionPolicy::Lru, 0);
    assert!(matches!(result, Err(CacheError::InvalidCapacity(0))));
}

#[test]
fn test_policy_name_selects_lru() {
    let policy: EvictionPolicy = "lru".parse().unwrap();
    assert_eq!(policy, EvictionPolicy::Lru);
}

#[test]
fn test_unknown_policy_name_is_rejected() {
    let result = "ttl".parse::<EvictionPolicy>();
    assert_eq!(result, Err(CacheError::UnknownPolicy("ttl".to_string())));
}

#[test]
fn test_trait_object_supports_arbitrary_value_types() {
    #[derive(Debug, PartialEq)]
    struct Session {
        user: String,
        hits: u32,
    }

    let mut cache = new_cache::<u64, Session>(EvictionPolicy::Lru, 2).unwrap();

    cache.put(
        7,
        Session {
            user: "alice".to_string(),
            hits: 1,
        },
    );
    cache.put(
        8,
        Session {
            user: "bob".to_string(),
            hits: 2,
        },
    );
    cache.put(
        9,
        Session {
            user: "carol".to_string(),
            hits: 3,
        },
    );

    // Oldest session evicted, ownership of removed values comes back out
    assert_eq!(cache.get(&7), None);
    let removed = cache.remove(&8).unwrap();
    assert_eq!(removed.user, "bob");
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_eviction_through_trait_object() {
    let mut cache = new_cache::<String, i32>(EvictionPolicy::Lru, 2).unwrap();

    cache.put("key1".to_string(), 1);
    cache.put("key2".to_string(), 2);
    cache.get(&"key1".to_string());
    cache.put("key3".to_string(), 3);

    assert_eq!(cache.get(&"key1".to_string()), Some(&1));
    assert_eq!(cache.get(&"key2".to_string()), None);
    assert_eq!(cache.get(&"key3".to_string()), Some(&3));
}

#[test]
fn test_concrete_type_exposes_capacity() {
    let cache = LruCache::<String, i32>::new(16).unwrap();
    assert_eq!(cache.capacity(), 16);
}
