//! Typed Entity Ids
//!
//! Sequential integer ids with a phantom marker so a `UserId` can never be
//! passed where a `ProductId` is expected. Allocation (the monotonically
//! increasing sequence) is owned by each store; this type only carries the
//! value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Typed wrapper over a sequential `i64` id.
#[derive(Serialize, Deserialize)]
#[serde(transparent, bound = "")]
pub struct Id<M> {
    value: i64,
    #[serde(skip)]
    _marker: PhantomData<fn() -> M>,
}

impl<M> Id<M> {
    /// Wrap a raw id value (typically produced by a store's id sequence).
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub const fn as_i64(&self) -> i64 {
        self.value
    }
}

// Manual impls: derives would bound on `M`, which is only a marker.

impl<M> Clone for Id<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for Id<M> {}

impl<M> PartialEq for Id<M> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<M> Eq for Id<M> {}

impl<M> PartialOrd for Id<M> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<M> Ord for Id<M> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl<M> Hash for Id<M> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<M> fmt::Debug for Id<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<M> fmt::Display for Id<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<M> From<i64> for Id<M> {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestMarker;
    type TestId = Id<TestMarker>;

    #[test]
    fn test_id_value_roundtrip() {
        let id = TestId::new(42);
        assert_eq!(id.as_i64(), 42);
    }

    #[test]
    fn test_id_ordering_follows_value() {
        let a = TestId::new(1);
        let b = TestId::new(2);
        assert!(a < b);
        assert_eq!(a, TestId::new(1));
    }

    #[test]
    fn test_id_serializes_as_plain_number() {
        let id = TestId::new(7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");

        let back: TestId = serde_json::from_str("7").unwrap();
        assert_eq!(back, id);
    }
}
