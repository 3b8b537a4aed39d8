//! Per-advance metrics for the board engine.
//!
//! [`AdvanceMetrics`] captures timing and work counts for a single
//! generation. The board keeps the most recent one; callers that want a
//! history collect them after each advance.

/// Timing and work counts collected during a single advance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdvanceMetrics {
    /// Wall-clock time for the whole advance, in microseconds.
    pub total_us: u64,
    /// Number of cells whose successor was computed.
    pub cells_evaluated: u64,
    /// Number of cells whose state changed.
    pub transitions: u64,
    /// Bucket offsets dropped because they left a `NoCheck` grid.
    pub neighbours_skipped: u64,
}

impl AdvanceMetrics {
    /// Fraction of evaluated cells that changed state, in `[0, 1]`.
    pub fn activity(&self) -> f64 {
        if self.cells_evaluated == 0 {
            0.0
        } else {
            self.transitions as f64 / self.cells_evaluated as f64
        }
    }
}
