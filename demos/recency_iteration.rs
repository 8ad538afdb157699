use lrukit::policy::lru::LruCache;

fn main() {
    let mut cache = LruCache::new(4);

    for (key, value) in [(1, "one"), (2, "two"), (3, "three"), (4, "four")] {
        cache.insert(key, value);
    }

    // Reads reorder: key 2 becomes the most recently used.
    cache.get(&2);

    let newest_first: Vec<u32> = cache.keys().copied().collect();
    println!("newest first: {:?}", newest_first);

    let oldest_first: Vec<u32> = cache.keys().rev().copied().collect();
    println!("oldest first: {:?}", oldest_first);

    let resolved = cache.get_or_insert_with(9, || "nine");
    println!("resolved 9 -> {}", resolved);
    println!("len after fill: {}", cache.len());
}

// Expected output:
// newest first: [2, 4, 3, 1]
// oldest first: [1, 3, 4, 2]
// resolved 9 -> nine
// len after fill: 4
//
// Explanation: capacity=4; the miss on key 9 invokes the producer once and
// evicts key 1, the least recently used at that point.
