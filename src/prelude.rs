//! Convenience re-exports for the common surface.

pub use crate::ds::{IntrusiveList, SlotArena, SlotId};
pub use crate::error::InvariantError;
#[cfg(feature = "metrics")]
pub use crate::metrics::LruMetricsSnapshot;
pub use crate::policy::lru::LruCache;
pub use crate::traits::{CoreCache, LruCacheTrait, ReadOnlyCache};
