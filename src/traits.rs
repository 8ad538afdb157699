//! # Cache trait hierarchy
//!
//! Seams for code that wants to stay generic over the cache implementation,
//! split by the mutability each operation needs:
//!
//! ```text
//!   ┌─────────────────────────────────────────┐
//!   │          ReadOnlyCache<K, V>            │
//!   │                                         │
//!   │  contains(&, &K) → bool                 │
//!   │  peek(&, &K) → Option<&V>               │
//!   │  len(&) → usize                         │
//!   │  is_empty(&) → bool                     │
//!   │  capacity(&) → usize                    │
//!   └───────────────────┬─────────────────────┘
//!                       │
//!                       ▼
//!   ┌─────────────────────────────────────────┐
//!   │           CoreCache<K, V>               │
//!   │                                         │
//!   │  insert(&mut, K, V) → Option<V>         │
//!   │  get(&mut, &K) → Option<&V>             │
//!   │  clear(&mut)                            │
//!   └───────────────────┬─────────────────────┘
//!                       │
//!                       ▼
//!   ┌─────────────────────────────────────────┐
//!   │          LruCacheTrait<K, V>            │
//!   │                                         │
//!   │  touch(&mut, &K) → bool                 │
//!   │  pop_lru(&mut) → Option<(K, V)>         │
//!   │  peek_lru(&) → Option<(&K, &V)>         │
//!   │  recency_rank(&, &K) → Option<usize>    │
//!   └─────────────────────────────────────────┘
//! ```
//!
//! `get` takes `&mut self` on purpose: a recency cache reorders its chain on
//! every hit, so even a "read" is a structural write. Code that must not
//! disturb recency order should bind against [`ReadOnlyCache::peek`].

/// Read-only observations that never disturb recency order.
pub trait ReadOnlyCache<K, V> {
    /// Returns `true` if `key` is present.
    fn contains(&self, key: &K) -> bool;

    /// Returns the value for `key` without promoting it.
    fn peek(&self, key: &K) -> Option<&V>;

    /// Returns the current number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if the cache holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the maximum number of entries, or 0 for unbounded.
    fn capacity(&self) -> usize;
}

/// Core mutating operations every cache supports.
///
/// # Example
///
/// ```
/// use lrukit::policy::lru::LruCache;
/// use lrukit::traits::CoreCache;
///
/// fn warm<C: CoreCache<u64, String>>(cache: &mut C, data: &[(u64, String)]) {
///     for (key, value) in data {
///         cache.insert(*key, value.clone());
///     }
/// }
///
/// let mut cache = LruCache::new(16);
/// warm(&mut cache, &[(1, "one".into()), (2, "two".into())]);
/// assert_eq!(cache.len(), 2);
/// ```
pub trait CoreCache<K, V>: ReadOnlyCache<K, V> {
    /// Inserts a key-value pair, returning the previous value if the key
    /// existed. May evict the least-recently-used entry on overflow.
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Returns the value for `key`, promoting it to most-recently-used.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Removes all entries.
    fn clear(&mut self);
}

/// Recency-specific operations.
///
/// # Example
///
/// ```
/// use lrukit::policy::lru::LruCache;
/// use lrukit::traits::LruCacheTrait;
///
/// fn eviction_candidate<C: LruCacheTrait<u32, char>>(cache: &C) -> Option<u32> {
///     cache.peek_lru().map(|(key, _)| *key)
/// }
///
/// let mut cache = LruCache::new(3);
/// cache.insert(1, 'a');
/// cache.insert(2, 'b');
/// cache.insert(3, 'c');
///
/// // Key 1 is the eviction candidate until it is touched.
/// assert_eq!(eviction_candidate(&cache), Some(1));
/// assert!(cache.touch(&1));
/// assert_eq!(eviction_candidate(&cache), Some(2));
/// ```
pub trait LruCacheTrait<K, V>: CoreCache<K, V> {
    /// Promotes `key` to most-recently-used without returning its value.
    /// Returns `false` if the key is absent.
    fn touch(&mut self, key: &K) -> bool;

    /// Removes and returns the least-recently-used entry.
    fn pop_lru(&mut self) -> Option<(K, V)>;

    /// Returns the least-recently-used entry without removing it.
    fn peek_lru(&self) -> Option<(&K, &V)>;

    /// Returns the position of `key` in recency order (0 = most recent).
    /// O(n) scan.
    fn recency_rank(&self, key: &K) -> Option<usize>;
}
