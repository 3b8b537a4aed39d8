//! Square `n x n` lattice with bucket-driven neighbour resolution.

use crate::bucket::{Bucket, Offset};
use crate::edge::EdgeMode;
use crate::error::SpaceError;
use smallvec::SmallVec;

/// Resolve a single axis value under the given edge mode.
///
/// Returns `Some(resolved)` or `None` for a `NoCheck` lookup that left
/// `[0, len)`. Wrapping uses Euclidean remainder, so negative values of
/// any magnitude land in range.
pub fn resolve_axis(val: i64, len: usize, edge: EdgeMode) -> Option<usize> {
    let n = len as i64;
    if val >= 0 && val < n {
        return Some(val as usize);
    }
    match edge {
        EdgeMode::NoCheck => None,
        EdgeMode::Wrap => Some(val.rem_euclid(n) as usize),
    }
}

/// A two-dimensional `size x size` square grid.
///
/// Cells are addressed `(row, col)` and stored row-major, so the flat
/// index of a cell is `row * size + col`. Which cells count as a cell's
/// neighbours is decided per call by a [`Bucket`]; boundary handling is
/// fixed by the lattice's [`EdgeMode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareLattice {
    size: usize,
    edge: EdgeMode,
}

impl SquareLattice {
    /// Maximum side length: coordinates are offset in signed arithmetic,
    /// so each axis must fit in `i32`.
    pub const MAX_DIM: usize = i32::MAX as usize;

    /// Create a new lattice with `size * size` cells.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if `size` is 0, or
    /// `Err(SpaceError::DimensionTooLarge)` if it exceeds [`Self::MAX_DIM`].
    pub fn new(size: usize, edge: EdgeMode) -> Result<Self, SpaceError> {
        if size == 0 {
            return Err(SpaceError::EmptySpace);
        }
        if size > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "grid_size",
                value: size,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self { size, edge })
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// Edge mode.
    pub fn edge_mode(&self) -> EdgeMode {
        self.edge
    }

    /// Flat row-major index of `(row, col)`.
    ///
    /// The coordinate is assumed in bounds; use
    /// [`check_bounds`](Self::check_bounds) first for untrusted input.
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Check that `(row, col)` lies on the lattice.
    pub fn check_bounds(&self, row: usize, col: usize) -> Result<(), SpaceError> {
        if row >= self.size || col >= self.size {
            return Err(SpaceError::CoordOutOfBounds {
                row,
                col,
                bounds: format!("[0, {}) x [0, {})", self.size, self.size),
            });
        }
        Ok(())
    }

    /// Resolve `offset` applied at `(row, col)` to an in-bounds cell.
    ///
    /// Returns `None` only in [`EdgeMode::NoCheck`], when either axis
    /// leaves the grid.
    #[inline]
    pub fn resolve(&self, row: usize, col: usize, offset: Offset) -> Option<(usize, usize)> {
        let nr = resolve_axis(row as i64 + offset.dr as i64, self.size, self.edge)?;
        let nc = resolve_axis(col as i64 + offset.dc as i64, self.size, self.edge)?;
        Some((nr, nc))
    }

    /// Flat indices of the cells `bucket` reaches from `(row, col)`, in
    /// bucket order.
    ///
    /// Offsets that fall off a `NoCheck` lattice are omitted, so the
    /// result may be shorter than the bucket.
    pub fn neighbours(&self, row: usize, col: usize, bucket: &Bucket) -> SmallVec<[usize; 8]> {
        bucket
            .iter()
            .filter_map(|&o| self.resolve(row, col, o))
            .map(|(r, c)| self.index(r, c))
            .collect()
    }
}
