//! Counter-based cache observability, compiled in with the `metrics` feature.
//!
//! Recording is split from consumption: the cache bumps counters through the
//! recorder traits as a side effect of its normal operations, and callers
//! pull [`LruMetricsSnapshot`] copies when they want numbers.

pub mod cell;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;

pub use cell::MetricsCell;
pub use metrics_impl::LruMetrics;
pub use snapshot::LruMetricsSnapshot;
pub use traits::{
    CoreMetricsRecorder, LruMetricsReadRecorder, LruMetricsRecorder, MetricsSnapshotProvider,
};
