//! LRU Cache Module
//!
//! Implements the Least Recently Used eviction policy over an arena of
//! doubly linked entries indexed by a hash map.

use std::collections::HashMap;
use std::hash::Hash;

use crate::cache::{Bounded, Cache, Capacity};
use crate::error::Result;

// == Entry Node ==
/// A single cache entry threaded into the recency list.
///
/// `prev` points toward the most recently used end, `next` toward the
/// least recently used end. Links are arena slot indices, not pointers,
/// so relinking never touches the entry data.
#[derive(Debug)]
struct Node<K, V> {
    key: K,
    value: V,
    prev: Option<usize>,
    next: Option<usize>,
}

// == LRU Cache ==
/// A Least Recently Used (LRU) cache.
///
/// Evicts the least recently accessed entry when an insertion would
/// exceed the configured capacity. Entries live in an arena of slots
/// forming a doubly linked recency list (head = most recently used,
/// tail = least recently used); a `HashMap` maps each key to its slot,
/// so `put`, `get` and `remove` are all O(1) relink operations.
///
/// Single-threaded by design: callers needing shared access must wrap
/// the cache in their own synchronization.
#[derive(Debug)]
pub struct LruCache<K, V> {
    /// Key to arena slot lookup
    index: HashMap<K, usize>,
    /// Entry arena; `None` slots are reusable
    slots: Vec<Option<Node<K, V>>>,
    /// Indices of vacated slots available for reuse
    free: Vec<usize>,
    /// Most recently used slot
    head: Option<usize>,
    /// Least recently used slot, the eviction candidate
    tail: Option<usize>,
    /// Validated maximum entry count
    capacity: Capacity,
}

impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    // == Constructor ==
    /// Creates an empty LRU cache with the given capacity.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries the cache can hold
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidCapacity`] when `capacity` is zero.
    ///
    /// [`CacheError::InvalidCapacity`]: crate::error::CacheError::InvalidCapacity
    pub fn new(capacity: usize) -> Result<Self> {
        let capacity = Capacity::new(capacity)?;
        Ok(Self {
            index: HashMap::with_capacity(capacity.get()),
            slots: Vec::with_capacity(capacity.get()),
            free: Vec::new(),
            head: None,
            tail: None,
            capacity,
        })
    }

    // == Peek ==
    /// Returns the value for a key without refreshing its recency.
    pub fn peek(&self, key: &K) -> Option<&V> {
        let idx = *self.index.get(key)?;
        self.slots[idx].as_ref().map(|node| &node.value)
    }

    // == Peek LRU ==
    /// Returns the current eviction candidate without removing it.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        let idx = self.tail?;
        self.slots[idx].as_ref().map(|node| (&node.key, &node.value))
    }

    // == Contains ==
    /// Checks whether a key is present, without refreshing its recency.
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    // == Detach ==
    /// Unlinks a slot from the recency list, fixing up neighbors and
    /// the head/tail anchors.
    fn detach(&mut self, idx: usize) {
        let (prev, next) = match self.slots[idx].as_ref() {
            Some(node) => (node.prev, node.next),
            None => return,
        };

        match prev {
            Some(p) => {
                if let Some(node) = self.slots[p].as_mut() {
                    node.next = next;
                }
            }
            None => self.head = next,
        }

        match next {
            Some(n) => {
                if let Some(node) = self.slots[n].as_mut() {
                    node.prev = prev;
                }
            }
            None => self.tail = prev,
        }

        if let Some(node) = self.slots[idx].as_mut() {
            node.prev = None;
            node.next = None;
        }
    }

    // == Attach Front ==
    /// Links a detached slot in at the most recently used position.
    fn attach_front(&mut self, idx: usize) {
        let old_head = self.head;

        if let Some(node) = self.slots[idx].as_mut() {
            node.prev = None;
            node.next = old_head;
        }

        match old_head {
            Some(h) => {
                if let Some(node) = self.slots[h].as_mut() {
                    node.prev = Some(idx);
                }
            }
            // List was empty, so this slot is also the tail
            None => self.tail = Some(idx),
        }

        self.head = Some(idx);
    }

    // == Allocate ==
    /// Places a new entry into a free slot, or grows the arena.
    fn allocate(&mut self, key: K, value: V) -> usize {
        let node = Node {
            key,
            value,
            prev: None,
            next: None,
        };
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                idx
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    // == Evict LRU ==
    /// Removes and returns the least recently used entry.
    ///
    /// Returns None if the cache is empty.
    fn evict_lru(&mut self) -> Option<(K, V)> {
        let idx = self.tail?;
        self.detach(idx);
        let node = self.slots[idx].take()?;
        self.index.remove(&node.key);
        self.free.push(idx);
        Some((node.key, node.value))
    }
}

// == Cache Implementation ==
impl<K, V> Cache<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Inserts a key-value pair, evicting the least recently used entry
    /// if the cache is at capacity and the key is new.
    fn put(&mut self, key: K, value: V) {
        // Overwrite case: replace in place and refresh recency
        if let Some(&idx) = self.index.get(&key) {
            if let Some(node) = self.slots[idx].as_mut() {
                node.value = value;
            }
            self.detach(idx);
            self.attach_front(idx);
            return;
        }

        if self.index.len() == self.capacity.get() {
            self.evict_lru();
        }

        let idx = self.allocate(key.clone(), value);
        self.attach_front(idx);
        self.index.insert(key, idx);
    }

    /// Retrieves a value and promotes its key to most recently used.
    fn get(&mut self, key: &K) -> Option<&V> {
        let idx = *self.index.get(key)?;
        self.detach(idx);
        self.attach_front(idx);
        self.slots[idx].as_ref().map(|node| &node.value)
    }

    /// Removes an entry, returning its value to the caller.
    fn remove(&mut self, key: &K) -> Option<V> {
        let idx = self.index.remove(key)?;
        self.detach(idx);
        let node = self.slots[idx].take()?;
        self.free.push(idx);
        Some(node.value)
    }

    /// Returns the current entry count.
    fn len(&self) -> usize {
        self.index.len()
    }
}

// == Bounded Implementation ==
impl<K, V> Bounded for LruCache<K, V> {
    fn capacity(&self) -> usize {
        self.capacity.get()
    }
}
