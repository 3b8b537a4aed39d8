//! Strongly-typed identifiers and the [`Counts`] type alias.

use smallvec::SmallVec;
use std::fmt;

/// Index of a discrete cell state.
///
/// A board with `K` states accepts `StateId(0)` through `StateId(K - 1)`.
/// The rule table and the count vector are both indexed by this value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(pub u32);

impl StateId {
    /// The state as a `usize` index into rule rows and count vectors.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for StateId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Monotonically increasing generation counter.
///
/// Incremented each time the board advances one step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(pub u64);

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Per-cell neighbour count vector, indexed by state.
///
/// `counts[k]` is the number of bucket offsets whose target cell is in
/// state `k`. Inline storage covers up to 8 states without touching the
/// heap; boards with more states spill transparently.
pub type Counts = SmallVec<[u32; 8]>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_id_index_and_display() {
        let s = StateId(3);
        assert_eq!(s.index(), 3);
        assert_eq!(s.to_string(), "3");
        assert_eq!(StateId::from(7u32), StateId(7));
    }

    #[test]
    fn tick_id_orders_and_defaults_to_zero() {
        assert_eq!(TickId::default(), TickId(0));
        assert!(TickId(1) < TickId(2));
        assert_eq!(TickId::from(5u64).to_string(), "5");
    }
}
