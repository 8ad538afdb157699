// ==============================================
// LRU CACHE BEHAVIORAL PROPERTIES (integration)
// ==============================================
//
// End-to-end checks of the cache's observable contract: the capacity bound,
// recency-order fidelity against a reference model, and full eviction
// scenarios exercised through the public API only.

use lrukit::policy::lru::LruCache;
use lrukit::traits::{CoreCache, LruCacheTrait, ReadOnlyCache};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ==============================================
// Capacity bound
// ==============================================

mod capacity_bound {
    use super::*;

    #[test]
    fn len_never_exceeds_capacity_at_any_prefix() {
        for capacity in [1usize, 2, 3, 7, 16] {
            let mut cache = LruCache::new(capacity);
            for i in 0..100u32 {
                cache.insert(i % 23, i);
                assert!(
                    cache.len() <= capacity,
                    "len {} exceeded capacity {} after insert #{}",
                    cache.len(),
                    capacity,
                    i
                );
            }
        }
    }

    #[test]
    fn unbounded_cache_never_evicts() {
        let mut cache = LruCache::new(0);
        for i in 0..10_000u32 {
            cache.insert(i, i);
        }
        assert_eq!(cache.len(), 10_000);
        for i in (0..10_000u32).step_by(997) {
            assert_eq!(cache.peek(&i), Some(&i));
        }
    }

    #[test]
    fn replace_is_not_growth() {
        let mut cache = LruCache::new(3);
        cache.insert(1, 1);
        cache.insert(2, 2);
        cache.insert(3, 3);

        for _ in 0..10 {
            cache.insert(2, 22);
            assert_eq!(cache.len(), 3);
        }
        // Nothing was evicted by the replacements.
        assert!(cache.contains(&1));
        assert!(cache.contains(&2));
        assert!(cache.contains(&3));
    }
}

// ==============================================
// Eviction scenarios
// ==============================================

mod eviction_scenarios {
    use super::*;

    #[test]
    fn touched_key_survives_overflow() {
        let mut cache = LruCache::new(3);
        cache.insert(1, 1);
        cache.insert(2, 2);
        cache.insert(3, 3);
        cache.get(&1); // 2 becomes the least recently used
        cache.insert(4, 4);

        assert_eq!(cache.get(&2), None);
        assert_eq!(cache.get(&1), Some(&1));
        assert_eq!(cache.get(&3), Some(&3));
        assert_eq!(cache.get(&4), Some(&4));
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn replacement_promotes_and_shifts_the_victims() {
        let mut cache = LruCache::new(3);
        cache.insert(1, 1);
        cache.insert(2, 2);
        cache.insert(3, 3);
        cache.insert(1, 10); // key 1 becomes MRU with the new value
        cache.insert(4, 4); // evicts 2
        cache.insert(5, 5); // evicts 3

        assert_eq!(cache.get(&1), Some(&10));
        assert_eq!(cache.get(&2), None);
        assert_eq!(cache.get(&3), None);
        assert_eq!(cache.get(&4), Some(&4));
        assert_eq!(cache.get(&5), Some(&5));
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn eviction_follows_strict_recency_order() {
        let mut cache = LruCache::new(4);
        for i in 1..=4 {
            cache.insert(i, i);
        }
        // Recency now 4, 3, 2, 1; reorder it thoroughly.
        cache.get(&2);
        cache.touch(&1);
        cache.get(&3); // order: 3, 1, 2, 4

        for (next, victim) in [(5, 4), (6, 2), (7, 1), (8, 3)] {
            assert_eq!(cache.peek_lru().map(|(k, _)| *k), Some(victim));
            cache.insert(next, next);
            assert!(!cache.contains(&victim));
        }
        assert_eq!(cache.len(), 4);
        for survivor in 5..=8 {
            assert!(cache.contains(&survivor));
        }
    }
}

// ==============================================
// Order fidelity vs. a reference model
// ==============================================
//
// Drives the cache with a randomized op mix and mirrors every operation in
// a Vec-based model that keeps keys most-recent-first. Forward iteration
// must equal the model exactly and reverse iteration must be its mirror,
// after every single operation.

mod order_fidelity {
    use super::*;

    struct Model {
        capacity: usize,
        keys: Vec<u32>, // most recent first
    }

    impl Model {
        fn new(capacity: usize) -> Self {
            Self {
                capacity,
                keys: Vec::new(),
            }
        }

        fn touch(&mut self, key: u32) {
            if let Some(pos) = self.keys.iter().position(|&k| k == key) {
                let key = self.keys.remove(pos);
                self.keys.insert(0, key);
            }
        }

        fn insert(&mut self, key: u32) {
            if self.keys.contains(&key) {
                self.touch(key);
                return;
            }
            if self.capacity > 0 && self.keys.len() == self.capacity {
                self.keys.pop();
            }
            self.keys.insert(0, key);
        }
    }

    fn assert_order_matches(cache: &LruCache<u32, u32>, model: &Model) {
        let forward: Vec<u32> = cache.keys().copied().collect();
        assert_eq!(forward, model.keys, "forward order diverged from model");

        let mut reverse: Vec<u32> = cache.keys().rev().copied().collect();
        reverse.reverse();
        assert_eq!(reverse, model.keys, "reverse order is not the mirror");
    }

    #[test]
    fn randomized_ops_preserve_recency_order() {
        let mut rng = StdRng::seed_from_u64(0x1ab0);

        for capacity in [0usize, 1, 3, 8] {
            let mut cache = LruCache::new(capacity);
            let mut model = Model::new(capacity);

            for _ in 0..500 {
                let key = rng.gen_range(0..12u32);
                match rng.gen_range(0..4u8) {
                    0 => {
                        let hit = cache.get(&key).is_some();
                        assert_eq!(hit, model.keys.contains(&key));
                        if hit {
                            model.touch(key);
                        }
                    }
                    1 => {
                        cache.insert(key, key);
                        model.insert(key);
                    }
                    2 => {
                        let touched = cache.touch(&key);
                        assert_eq!(touched, model.keys.contains(&key));
                        model.touch(key);
                    }
                    _ => {
                        let value = *cache.get_or_insert_with(key, || key);
                        assert_eq!(value, key);
                        model.insert(key);
                    }
                }
                assert_order_matches(&cache, &model);
                assert_eq!(cache.len(), model.keys.len());
                #[cfg(debug_assertions)]
                cache.check_invariants().unwrap();
            }
        }
    }

    #[test]
    fn pop_lru_drains_in_mirror_order() {
        let mut cache = LruCache::new(5);
        for i in 1..=5 {
            cache.insert(i, i * 10);
        }
        cache.get(&2);
        cache.get(&4);

        let expected: Vec<u32> = cache.keys().rev().copied().collect();
        let mut drained = Vec::new();
        while let Some((key, _)) = cache.pop_lru() {
            drained.push(key);
        }
        assert_eq!(drained, expected);
        assert!(cache.is_empty());
    }
}

// ==============================================
// Clear and iterator exhaustion
// ==============================================

mod reset_and_exhaustion {
    use super::*;

    #[test]
    fn clear_resets_fully() {
        let mut cache = LruCache::new(4);
        for i in 0..4 {
            cache.insert(i, i);
        }
        cache.clear();

        assert_eq!(cache.len(), 0);
        assert_eq!(cache.iter().count(), 0);
        assert_eq!(cache.iter().rev().count(), 0);
        #[cfg(debug_assertions)]
        cache.check_invariants().unwrap();
    }

    #[test]
    fn exhausted_iterators_stay_exhausted() {
        let mut cache = LruCache::new(3);
        cache.insert(1, 'a');
        cache.insert(2, 'b');

        let mut forward = cache.keys();
        while forward.next().is_some() {}
        for _ in 0..5 {
            assert_eq!(forward.next(), None);
        }

        let mut reverse = cache.values().rev();
        while reverse.next().is_some() {}
        for _ in 0..5 {
            assert_eq!(reverse.next(), None);
        }
    }
}

// ==============================================
// Trait-object-free generic usage
// ==============================================

mod trait_seams {
    use super::*;

    fn fill<C: CoreCache<u32, u32>>(cache: &mut C, n: u32) {
        for i in 0..n {
            cache.insert(i, i);
        }
    }

    fn drain_lru<C: LruCacheTrait<u32, u32>>(cache: &mut C) -> Vec<u32> {
        let mut keys = Vec::new();
        while let Some((key, _)) = cache.pop_lru() {
            keys.push(key);
        }
        keys
    }

    fn occupancy<C: ReadOnlyCache<u32, u32>>(cache: &C) -> (usize, usize) {
        (cache.len(), cache.capacity())
    }

    #[test]
    fn generic_callers_see_the_same_behavior() {
        let mut cache = LruCache::new(3);
        fill(&mut cache, 5);
        assert_eq!(occupancy(&cache), (3, 3));

        assert_eq!(drain_lru(&mut cache), vec![2, 3, 4]);
        assert!(cache.is_empty());
    }
}
