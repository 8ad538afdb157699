//! Error types for the lrukit library.
//!
//! Every cache operation is total: lookups signal absence through `Option`
//! and capacity enforcement evicts silently, so the hot path has no error
//! type at all. The only error surface is structural validation:
//!
//! - [`InvariantError`]: returned by the debug-only `check_invariants`
//!   methods when the index and the recency chain disagree.

use std::fmt;

/// Error returned when internal cache invariants are violated.
///
/// Produced by debug-only `check_invariants` methods. Carries a
/// human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_shows_message() {
        let err = InvariantError::new("index and chain disagree on length");
        assert_eq!(err.to_string(), "index and chain disagree on length");
    }

    #[test]
    fn debug_includes_message() {
        let err = InvariantError::new("dangling handle");
        assert!(format!("{:?}", err).contains("dangling handle"));
    }

    #[test]
    fn clone_and_eq() {
        let a = InvariantError::new("x");
        let b = a.clone();
        assert_eq!(a, b);
        assert_eq!(a.message(), "x");
    }
}
