//! Read-only grid access shared by the engine, renderers and test mocks.

use crate::id::StateId;

/// Read-only access to a square grid of cell states.
///
/// Implemented by the engine's borrowed snapshot view and by test mocks.
/// Consumers (hashing, rendering collaborators) read through
/// `&dyn GridAccess` rather than depending on the engine's storage.
pub trait GridAccess {
    /// Side length of the grid.
    fn grid_size(&self) -> usize;

    /// State of the cell at `(row, col)`.
    ///
    /// Returns `None` if the coordinate is out of bounds.
    fn state_at(&self, row: usize, col: usize) -> Option<StateId>;
}
