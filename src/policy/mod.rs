//! Eviction policies. This crate ships one: strict least-recently-used.

pub mod lru;

pub use lru::LruCache;
