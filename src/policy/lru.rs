//! # Least Recently Used (LRU) cache
//!
//! A bounded recency cache: a hash index fused with an intrusive
//! doubly-linked recency list, giving O(1) `get`/`insert`/eviction with
//! deterministic most-recent-first ordering.
//!
//! ## Architecture
//!
//! ```text
//!   ┌─────────────────────────────────────────────────────────────┐
//!   │                       LruCache<K, V>                        │
//!   │                                                             │
//!   │   ┌───────────────────────────────────────────────────┐     │
//!   │   │  FxHashMap<K, SlotId> (index into the list arena) │     │
//!   │   │                                                   │     │
//!   │   │  ┌─────────┬───────────────────────────────┐      │     │
//!   │   │  │   Key   │  SlotId                       │      │     │
//!   │   │  ├─────────┼───────────────────────────────┤      │     │
//!   │   │  │  k_1    │  ─────────────────────────┐   │      │     │
//!   │   │  │  k_2    │  ───────────────────┐     │   │      │     │
//!   │   │  │  k_3    │  ─────────────┐     │     │   │      │     │
//!   │   │  └─────────┴───────────────┼─────┼─────┼───┘      │     │
//!   │   └──────────────────────────────────┼─────┼──────────┘     │
//!   │                                │     │     │                │
//!   │   ┌────────────────────────────┼─────┼─────┼──────────┐     │
//!   │   │  IntrusiveList<Entry>      ▼     ▼     ▼          │     │
//!   │   │                                                   │     │
//!   │   │  head ─► [k_1] ◄──► [k_2] ◄──► [k_3] ◄── tail     │     │
//!   │   │          (MRU)                 (LRU)              │     │
//!   │   └───────────────────────────────────────────────────┘     │
//!   └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each entry (key + value) lives in exactly one list node; the list's
//! arena is the sole owner, and the index holds non-owning `SlotId` handles.
//!
//! ## Operation flow
//!
//! ```text
//!   INSERT new key (cache full, capacity = 3)
//!   ════════════════════════════════════════════════════════
//!   before:  head ─► [A] ◄──► [B] ◄──► [C] ◄── tail
//!   insert(D):
//!     1. Evict [C] from the tail, drop its index entry
//!     2. Link [D] at the head
//!   after:   head ─► [D] ◄──► [A] ◄──► [B] ◄── tail
//!
//!   GET existing key
//!   ════════════════════════════════════════════════════════
//!   get(B): index lookup O(1), then move [B] to the head.
//!   A `get` is a mutating read: every hit reorders the chain.
//!
//!   PEEK (no reordering)
//!   ════════════════════════════════════════════════════════
//!   peek(C): index lookup only, chain untouched.
//! ```
//!
//! ## Capacity
//!
//! `new(0)` builds an **unbounded** cache: capacity checks are skipped
//! entirely and nothing is ever evicted. Any positive capacity is a hard
//! bound — the chain never holds more than `capacity` entries, not even
//! transiently (eviction happens before the insert that would overflow).
//!
//! ## Thread safety
//!
//! `LruCache` is defined for a single logical owner. Promotions and
//! evictions are multi-step link edits, so concurrent mutation would
//! corrupt the chain; callers that share a cache across threads must hold
//! an exclusive lock for the duration of each operation and for the full
//! drain of any iterator obtained from the cache.
//!
//! ## Example
//!
//! ```
//! use lrukit::policy::lru::LruCache;
//!
//! let mut cache = LruCache::new(2);
//! cache.insert(1, "alpha");
//! cache.insert(2, "beta");
//!
//! assert_eq!(cache.get(&1), Some(&"alpha")); // 1 becomes MRU
//! cache.insert(3, "gamma");                  // evicts 2, the LRU
//!
//! assert!(cache.contains(&1));
//! assert!(!cache.contains(&2));
//! assert_eq!(cache.len(), 2);
//! ```

use std::fmt;
use std::hash::Hash;
use std::iter::FusedIterator;
use std::mem;

use rustc_hash::FxHashMap;

use crate::ds::intrusive_list::{IntrusiveList, Iter as ListIter};
use crate::ds::slot_arena::SlotId;
#[cfg(any(test, debug_assertions))]
use crate::error::InvariantError;
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::LruMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::LruMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    CoreMetricsRecorder, LruMetricsReadRecorder, LruMetricsRecorder, MetricsSnapshotProvider,
};
use crate::traits::{CoreCache, LruCacheTrait, ReadOnlyCache};

/// One cache entry: the key rides in the node so eviction can remove the
/// matching index slot without a reverse lookup.
struct Entry<K, V> {
    key: K,
    value: V,
}

/// Bounded recency cache with O(1) get, insert and eviction.
///
/// Keys need `Eq + Hash` for the index and `Clone` because each key is
/// stored twice: once in the index and once in its list node.
pub struct LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    index: FxHashMap<K, SlotId>,
    list: IntrusiveList<Entry<K, V>>,
    capacity: usize,
    #[cfg(feature = "metrics")]
    metrics: LruMetrics,
}

impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// A `capacity` of 0 means unbounded: inserts never evict.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::policy::lru::LruCache;
    ///
    /// let bounded: LruCache<u32, String> = LruCache::new(100);
    /// assert_eq!(bounded.capacity(), 100);
    ///
    /// let unbounded: LruCache<u32, String> = LruCache::new(0);
    /// assert_eq!(unbounded.capacity(), 0);
    /// ```
    pub fn new(capacity: usize) -> Self {
        LruCache {
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            list: IntrusiveList::with_capacity(capacity),
            capacity,
            #[cfg(feature = "metrics")]
            metrics: LruMetrics::default(),
        }
    }

    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns the maximum number of entries, or 0 for unbounded.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if `key` is present. Does not promote.
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Returns the value for `key` without promoting it.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::policy::lru::LruCache;
    ///
    /// let mut cache = LruCache::new(2);
    /// cache.insert(1, "first");
    /// cache.insert(2, "second");
    ///
    /// // peek leaves key 1 as the eviction candidate
    /// assert_eq!(cache.peek(&1), Some(&"first"));
    /// cache.insert(3, "third");
    /// assert!(!cache.contains(&1));
    /// ```
    pub fn peek(&self, key: &K) -> Option<&V> {
        let &id = self.index.get(key)?;
        self.list.get(id).map(|entry| &entry.value)
    }

    /// Returns the value for `key`, promoting it to most-recently-used.
    ///
    /// A hit is a mutating read: the entry moves to the head of the recency
    /// chain. A miss has no side effect.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::policy::lru::LruCache;
    ///
    /// let mut cache = LruCache::new(2);
    /// cache.insert(1, 10);
    /// cache.insert(2, 20);
    ///
    /// assert_eq!(cache.get(&1), Some(&10)); // 2 is now the LRU
    /// assert_eq!(cache.get(&9), None);
    /// ```
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let id = match self.index.get(key) {
            Some(&id) => id,
            None => {
                #[cfg(feature = "metrics")]
                self.metrics.record_get_miss();
                return None;
            }
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();

        self.list.move_to_front(id);

        #[cfg(debug_assertions)]
        self.validate_invariants();

        self.list.get(id).map(|entry| &entry.value)
    }

    /// Returns the value for `key`, inserting `produce()` on a miss.
    ///
    /// The producer runs at most once, and only after the key is confirmed
    /// absent. Hit or miss, the entry ends up most-recently-used.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::policy::lru::LruCache;
    ///
    /// let mut cache = LruCache::new(3);
    /// cache.insert("a", 1);
    ///
    /// assert_eq!(*cache.get_or_insert_with("a", || 99), 1);
    /// assert_eq!(*cache.get_or_insert_with("b", || 2), 2);
    /// assert_eq!(cache.len(), 2);
    /// ```
    pub fn get_or_insert_with<F>(&mut self, key: K, produce: F) -> &V
    where
        F: FnOnce() -> V,
    {
        let id = match self.index.get(&key) {
            Some(&id) => {
                #[cfg(feature = "metrics")]
                self.metrics.record_get_hit();
                self.list.move_to_front(id);
                id
            }
            None => {
                #[cfg(feature = "metrics")]
                self.metrics.record_get_miss();
                let value = produce();
                self.link_new(key, value)
            }
        };

        #[cfg(debug_assertions)]
        self.validate_invariants();

        match self.list.get(id) {
            Some(entry) => &entry.value,
            None => unreachable!("index and recency chain are kept in bijection"),
        }
    }

    /// Inserts a key-value pair, returning the previous value if the key
    /// existed.
    ///
    /// Replacing an existing key updates the value in place and promotes
    /// the entry; it never evicts. A new key at capacity evicts the
    /// least-recently-used entry first, so the size never exceeds the bound.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::policy::lru::LruCache;
    ///
    /// let mut cache = LruCache::new(10);
    /// assert_eq!(cache.insert(1, "first"), None);
    /// assert_eq!(cache.insert(1, "updated"), Some("first"));
    /// assert_eq!(cache.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        if let Some(&id) = self.index.get(&key) {
            #[cfg(feature = "metrics")]
            self.metrics.record_insert_update();

            let previous = self
                .list
                .get_mut(id)
                .map(|entry| mem::replace(&mut entry.value, value));
            debug_assert!(previous.is_some());
            self.list.move_to_front(id);

            #[cfg(debug_assertions)]
            self.validate_invariants();

            return previous;
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();

        self.link_new(key, value);

        #[cfg(debug_assertions)]
        self.validate_invariants();

        None
    }

    /// Promotes `key` to most-recently-used without returning its value.
    ///
    /// Returns `false` if the key is absent.
    pub fn touch(&mut self, key: &K) -> bool {
        #[cfg(feature = "metrics")]
        self.metrics.record_touch_call();

        match self.index.get(key) {
            Some(&id) => {
                #[cfg(feature = "metrics")]
                self.metrics.record_touch_found();

                self.list.move_to_front(id);

                #[cfg(debug_assertions)]
                self.validate_invariants();

                true
            }
            None => false,
        }
    }

    /// Removes and returns the least-recently-used entry.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::policy::lru::LruCache;
    ///
    /// let mut cache = LruCache::new(10);
    /// cache.insert(1, "first");
    /// cache.insert(2, "second");
    ///
    /// assert_eq!(cache.pop_lru(), Some((1, "first")));
    /// assert_eq!(cache.len(), 1);
    /// ```
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        #[cfg(feature = "metrics")]
        self.metrics.record_pop_lru_call();

        let entry = self.list.pop_back()?;
        self.index.remove(&entry.key);

        #[cfg(feature = "metrics")]
        self.metrics.record_pop_lru_found();

        #[cfg(debug_assertions)]
        self.validate_invariants();

        Some((entry.key, entry.value))
    }

    /// Returns the least-recently-used entry without removing it.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        #[cfg(feature = "metrics")]
        self.metrics.record_peek_lru_call();

        let entry = self.list.back()?;

        #[cfg(feature = "metrics")]
        self.metrics.record_peek_lru_found();

        Some((&entry.key, &entry.value))
    }

    /// Returns the position of `key` in recency order (0 = most recent).
    ///
    /// O(n) scan of the chain.
    pub fn recency_rank(&self, key: &K) -> Option<usize> {
        #[cfg(feature = "metrics")]
        self.metrics.record_recency_rank_call();

        if !self.index.contains_key(key) {
            return None;
        }
        for (rank, entry) in self.list.iter().enumerate() {
            #[cfg(feature = "metrics")]
            self.metrics.record_recency_rank_scan_step();

            if entry.key == *key {
                #[cfg(feature = "metrics")]
                self.metrics.record_recency_rank_found();

                return Some(rank);
            }
        }
        None
    }

    /// Removes all entries and resets both chain ends.
    ///
    /// Entries are released without any per-key eviction side effect.
    pub fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();

        self.index.clear();
        self.list.clear();

        #[cfg(debug_assertions)]
        self.validate_invariants();
    }

    /// Returns an iterator over `(&K, &V)` in recency order, most recent
    /// first. Reverse with `.rev()` for least-recent-first.
    ///
    /// The iterator borrows the cache, so no mutating method (including
    /// `get`, which reorders) can run until it is dropped.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::policy::lru::LruCache;
    ///
    /// let mut cache = LruCache::new(3);
    /// cache.insert(1, 'a');
    /// cache.insert(2, 'b');
    /// cache.insert(3, 'c');
    /// cache.get(&1);
    ///
    /// let keys: Vec<u32> = cache.keys().copied().collect();
    /// assert_eq!(keys, [1, 3, 2]);
    ///
    /// let oldest_first: Vec<u32> = cache.keys().rev().copied().collect();
    /// assert_eq!(oldest_first, [2, 3, 1]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.list.iter(),
        }
    }

    /// Returns an iterator over keys in recency order, most recent first.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Returns an iterator over values in recency order, most recent first.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Links a previously-absent key at the head, evicting the tail first
    /// when the cache is full. Capacity 0 disables the bound entirely.
    fn link_new(&mut self, key: K, value: V) -> SlotId {
        if self.capacity > 0 && self.index.len() >= self.capacity {
            #[cfg(feature = "metrics")]
            self.metrics.record_evict_call();

            if let Some(evicted) = self.list.pop_back() {
                self.index.remove(&evicted.key);

                #[cfg(feature = "metrics")]
                self.metrics.record_evicted_entry();
            }
        }

        let id = self.list.push_front(Entry {
            key: key.clone(),
            value,
        });
        self.index.insert(key, id);
        id
    }

    /// Verifies the index/chain bijection, the capacity bound and chain
    /// connectivity. Compiled in debug and test builds only.
    #[cfg(any(test, debug_assertions))]
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.index.len() != self.list.len() {
            return Err(InvariantError::new(format!(
                "index holds {} keys but chain holds {} nodes",
                self.index.len(),
                self.list.len()
            )));
        }
        if self.capacity > 0 && self.list.len() > self.capacity {
            return Err(InvariantError::new(format!(
                "chain holds {} nodes, over capacity {}",
                self.list.len(),
                self.capacity
            )));
        }

        let mut walked = 0usize;
        for entry in self.list.iter() {
            if !self.index.contains_key(&entry.key) {
                return Err(InvariantError::new("chain node key missing from index"));
            }
            walked += 1;
            if walked > self.index.len() {
                return Err(InvariantError::new("chain is longer than the index"));
            }
        }
        if walked != self.index.len() {
            return Err(InvariantError::new("chain is shorter than the index"));
        }

        for (key, &id) in &self.index {
            match self.list.get(id) {
                Some(entry) if entry.key == *key => {}
                Some(_) => {
                    return Err(InvariantError::new(
                        "index handle points at a node holding a different key",
                    ));
                }
                None => return Err(InvariantError::new("index handle dangles")),
            }
        }

        self.list.debug_validate_invariants();
        Ok(())
    }

    #[cfg(debug_assertions)]
    fn validate_invariants(&self) {
        if let Err(err) = self.check_invariants() {
            panic!("lru invariant violation: {err}");
        }
    }
}

#[cfg(feature = "metrics")]
impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Copies the accumulated counters plus current dimensions.
    pub fn metrics_snapshot(&self) -> LruMetricsSnapshot {
        LruMetricsSnapshot {
            get_calls: self.metrics.get_calls,
            get_hits: self.metrics.get_hits,
            get_misses: self.metrics.get_misses,
            insert_calls: self.metrics.insert_calls,
            insert_updates: self.metrics.insert_updates,
            insert_new: self.metrics.insert_new,
            evict_calls: self.metrics.evict_calls,
            evicted_entries: self.metrics.evicted_entries,
            clear_calls: self.metrics.clear_calls,
            pop_lru_calls: self.metrics.pop_lru_calls,
            pop_lru_found: self.metrics.pop_lru_found,
            peek_lru_calls: self.metrics.peek_lru_calls.get(),
            peek_lru_found: self.metrics.peek_lru_found.get(),
            touch_calls: self.metrics.touch_calls,
            touch_found: self.metrics.touch_found,
            recency_rank_calls: self.metrics.recency_rank_calls.get(),
            recency_rank_found: self.metrics.recency_rank_found.get(),
            recency_rank_scan_steps: self.metrics.recency_rank_scan_steps.get(),
            cache_len: self.len(),
            capacity: self.capacity,
        }
    }
}

#[cfg(feature = "metrics")]
impl<K, V> MetricsSnapshotProvider<LruMetricsSnapshot> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn snapshot(&self) -> LruMetricsSnapshot {
        self.metrics_snapshot()
    }
}

impl<K, V> ReadOnlyCache<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn contains(&self, key: &K) -> bool {
        LruCache::contains(self, key)
    }

    fn peek(&self, key: &K) -> Option<&V> {
        LruCache::peek(self, key)
    }

    fn len(&self) -> usize {
        LruCache::len(self)
    }

    fn capacity(&self) -> usize {
        LruCache::capacity(self)
    }
}

impl<K, V> CoreCache<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        LruCache::insert(self, key, value)
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        LruCache::get(self, key)
    }

    fn clear(&mut self) {
        LruCache::clear(self)
    }
}

impl<K, V> LruCacheTrait<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn touch(&mut self, key: &K) -> bool {
        LruCache::touch(self, key)
    }

    fn pop_lru(&mut self) -> Option<(K, V)> {
        LruCache::pop_lru(self)
    }

    fn peek_lru(&self) -> Option<(&K, &V)> {
        LruCache::peek_lru(self)
    }

    fn recency_rank(&self, key: &K) -> Option<usize> {
        LruCache::recency_rank(self, key)
    }
}

impl<K, V> fmt::Debug for LruCache<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish_non_exhaustive()
    }
}

impl<K, V> Default for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates an unbounded cache.
    fn default() -> Self {
        Self::new(0)
    }
}

impl<K, V> Extend<(K, V)> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, K, V> IntoIterator for &'a LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

/// Iterator over `(&K, &V)` in recency order, most recent first.
///
/// Double-ended: `.rev()` walks least-recent-first. Once exhausted it keeps
/// returning `None`.
pub struct Iter<'a, K, V> {
    inner: ListIter<'a, Entry<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| (&entry.key, &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|entry| (&entry.key, &entry.value))
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

impl<'a, K, V> FusedIterator for Iter<'a, K, V> {}

/// Iterator over keys in recency order, most recent first.
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K, V> DoubleEndedIterator for Keys<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, _)| key)
    }
}

impl<'a, K, V> ExactSizeIterator for Keys<'a, K, V> {}

impl<'a, K, V> FusedIterator for Keys<'a, K, V> {}

/// Iterator over values in recency order, most recent first.
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K, V> DoubleEndedIterator for Values<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, value)| value)
    }
}

impl<'a, K, V> ExactSizeIterator for Values<'a, K, V> {}

impl<'a, K, V> FusedIterator for Values<'a, K, V> {}
