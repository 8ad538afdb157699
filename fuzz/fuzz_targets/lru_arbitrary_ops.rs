#![no_main]

use libfuzzer_sys::fuzz_target;
use lrukit::policy::lru::LruCache;

// Fuzz arbitrary operation sequences on LruCache
//
// The first byte picks the capacity (0 = unbounded). The rest is consumed
// as (op, key) pairs over a small key space to force collisions, updates
// and evictions. Invariants are checked after every operation.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let capacity = usize::from(data[0] % 9); // 0..=8
    let mut cache: LruCache<u8, u32> = LruCache::new(capacity);
    let mut tick = 0u32;

    let mut idx = 1;
    while idx + 1 < data.len() {
        let op = data[idx] % 8;
        let key = data[idx + 1] % 16;
        tick += 1;

        match op {
            0 | 1 => {
                cache.insert(key, tick);
                assert_eq!(cache.peek(&key), Some(&tick));
                // A just-inserted key is the most recently used.
                assert_eq!(cache.keys().next(), Some(&key));
            }
            2 => {
                let was_present = cache.contains(&key);
                let hit = cache.get(&key).is_some();
                assert_eq!(hit, was_present);
                if hit {
                    assert_eq!(cache.keys().next(), Some(&key));
                }
            }
            3 => {
                let len_before = cache.len();
                let value = *cache.get_or_insert_with(key, || tick);
                if cache.len() != len_before {
                    assert_eq!(value, tick);
                }
                assert!(cache.contains(&key));
            }
            4 => {
                assert_eq!(cache.touch(&key), cache.contains(&key));
            }
            5 => {
                let expected = cache.keys().next_back().copied();
                let popped = cache.pop_lru().map(|(k, _)| k);
                assert_eq!(popped, expected);
            }
            6 => {
                let _ = cache.peek(&key);
                let _ = cache.peek_lru();
                let _ = cache.recency_rank(&key);
            }
            _ => {
                cache.clear();
                assert!(cache.is_empty());
            }
        }

        if capacity > 0 {
            assert!(cache.len() <= capacity);
        }
        cache
            .check_invariants()
            .expect("index and chain must stay in bijection");

        idx += 2;
    }
});
