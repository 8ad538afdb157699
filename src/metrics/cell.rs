use std::cell::Cell;

/// A metrics-only counter cell.
///
/// Lets `&self` methods (peeks, rank scans) bump their counters without
/// taking `&mut self`. Purely observational; never read by the cache logic.
#[repr(transparent)]
#[derive(Debug, Default)]
pub struct MetricsCell(Cell<u64>);

impl MetricsCell {
    #[inline]
    pub fn new() -> Self {
        Self(Cell::new(0))
    }

    #[inline]
    pub fn get(&self) -> u64 {
        self.0.get()
    }

    #[inline]
    pub fn incr(&self) {
        self.0.set(self.0.get() + 1);
    }
}
