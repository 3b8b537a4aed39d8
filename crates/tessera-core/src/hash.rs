//! Hashing utilities for grid comparison.
//!
//! Uses FNV-1a for fast, deterministic hashing of board state. These
//! hashes are not cryptographically secure; they exist for cheap
//! equality checks in determinism tests and cycle detection.

use crate::traits::GridAccess;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

/// Feed a single byte into an FNV-1a hash state.
#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

/// Feed a u32 (as 4 LE bytes) into an FNV-1a hash state.
#[inline]
fn fnv1a_u32(mut hash: u64, v: u32) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Feed a u64 (as 8 LE bytes) into an FNV-1a hash state.
#[inline]
fn fnv1a_u64(mut hash: u64, v: u64) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Compute a hash over every cell of a grid.
///
/// The side length is folded in first so that grids of different sizes
/// with the same flattened contents hash differently. Cells are visited
/// in row-major order.
pub fn grid_hash(grid: &dyn GridAccess) -> u64 {
    let n = grid.grid_size();
    let mut hash = fnv1a_u64(FNV_OFFSET, n as u64);

    for row in 0..n {
        for col in 0..n {
            // Out-of-range reads cannot happen for a well-formed grid;
            // hash them as u32::MAX so a broken impl is still visible.
            let state = grid.state_at(row, col).map_or(u32::MAX, |s| s.0);
            hash = fnv1a_u32(hash, state);
        }
    }

    hash
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::StateId;
    use proptest::prelude::*;

    struct FlatGrid {
        size: usize,
        cells: Vec<u32>,
    }

    impl GridAccess for FlatGrid {
        fn grid_size(&self) -> usize {
            self.size
        }

        fn state_at(&self, row: usize, col: usize) -> Option<StateId> {
            if row >= self.size || col >= self.size {
                return None;
            }
            self.cells.get(row * self.size + col).copied().map(StateId)
        }
    }

    fn grid(size: usize, cells: Vec<u32>) -> FlatGrid {
        FlatGrid { size, cells }
    }

    #[test]
    fn same_data_same_hash() {
        let a = grid(2, vec![0, 1, 1, 0]);
        let b = grid(2, vec![0, 1, 1, 0]);
        assert_eq!(grid_hash(&a), grid_hash(&b));
    }

    #[test]
    fn different_data_different_hash() {
        let a = grid(2, vec![0, 1, 1, 0]);
        let b = grid(2, vec![0, 1, 1, 1]);
        assert_ne!(grid_hash(&a), grid_hash(&b));
    }

    #[test]
    fn cell_order_matters() {
        let a = grid(2, vec![1, 0, 0, 0]);
        let b = grid(2, vec![0, 0, 0, 1]);
        assert_ne!(grid_hash(&a), grid_hash(&b));
    }

    #[test]
    fn size_is_folded_in() {
        let a = grid(1, vec![0]);
        let b = grid(2, vec![0, 0, 0, 0]);
        assert_ne!(grid_hash(&a), grid_hash(&b));
    }

    #[test]
    fn empty_grid_hash_is_offset_plus_size() {
        let empty = grid(0, vec![]);
        assert_eq!(grid_hash(&empty), fnv1a_u64(FNV_OFFSET, 0));
    }

    proptest! {
        #[test]
        fn hash_depends_only_on_contents(
            size in 1usize..8,
            seed_cells in proptest::collection::vec(0u32..4, 64),
        ) {
            let cells: Vec<u32> = seed_cells[..size * size].to_vec();
            let a = grid(size, cells.clone());
            let b = grid(size, cells);
            prop_assert_eq!(grid_hash(&a), grid_hash(&b));
        }
    }
}
