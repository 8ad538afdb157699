//! lrukit: a recency-ordered bounded cache.
//!
//! The core type is [`policy::lru::LruCache`], a hash index fused with an
//! intrusive doubly-linked recency list: O(1) `get`/`insert`/eviction with
//! deterministic most-recent-first ordering, double-ended iteration over
//! entries, and an optional counter-based metrics layer (`metrics` feature).
//!
//! See `DESIGN.md` for internal architecture and invariants.

pub mod ds;
pub mod error;
pub mod policy;
pub mod prelude;
pub mod traits;

#[cfg(feature = "metrics")]
pub mod metrics;
