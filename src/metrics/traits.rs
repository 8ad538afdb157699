//! Metrics recording and consumption seams.
//!
//! Recorders only write counters; snapshot providers only read them. The
//! split keeps recording call sites cheap and moves aggregation to the
//! consumer (tests, benches, monitoring glue).

/// Common counters for any cache policy.
pub trait CoreMetricsRecorder {
    fn record_get_hit(&mut self);
    fn record_get_miss(&mut self);
    fn record_insert_call(&mut self);
    fn record_insert_new(&mut self);
    fn record_insert_update(&mut self);
    fn record_evict_call(&mut self);
    fn record_evicted_entry(&mut self);
    fn record_clear(&mut self);
}

/// Counters specific to recency (LRU) behavior.
pub trait LruMetricsRecorder: CoreMetricsRecorder {
    fn record_pop_lru_call(&mut self);
    fn record_pop_lru_found(&mut self);
    fn record_touch_call(&mut self);
    fn record_touch_found(&mut self);
}

/// Read-only LRU counters for `&self` methods (uses interior mutability).
///
/// Use this for operations that only take `&self` (e.g. `peek`, `peek_lru`,
/// `recency_rank`) where a mutable recorder is not available.
pub trait LruMetricsReadRecorder {
    fn record_peek_lru_call(&self);
    fn record_peek_lru_found(&self);
    fn record_recency_rank_call(&self);
    fn record_recency_rank_found(&self);
    fn record_recency_rank_scan_step(&self);
}

/// Produces a point-in-time copy of accumulated counters.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}
