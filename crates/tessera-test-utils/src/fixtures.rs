//! Reusable grid fixtures.
//!
//! - [`Pattern`]: well-known Game of Life shapes, stamped with [`stamp`].
//! - [`random_grid`]: a deterministic random soup from a seeded ChaCha8 RNG.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// A `size x size` grid of zeros.
pub fn blank(size: usize) -> Vec<Vec<u32>> {
    vec![vec![0; size]; size]
}

/// Standard two-state patterns, live cells as `1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    /// Period-2 oscillator, vertical phase.
    Blinker,
    /// 2x2 still life.
    Block,
    /// Period-4 spaceship moving `(+1, +1)` (down and right).
    Glider,
    /// Period-2 oscillator.
    Toad,
}

impl Pattern {
    /// Live cells as `(row, col)` offsets from the pattern's top-left.
    pub fn cells(self) -> &'static [(usize, usize)] {
        match self {
            Pattern::Blinker => &[(0, 1), (1, 1), (2, 1)],
            Pattern::Block => &[(0, 0), (0, 1), (1, 0), (1, 1)],
            Pattern::Glider => &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
            Pattern::Toad => &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
        }
    }

    /// A blank `size x size` grid with this pattern stamped at `(row, col)`.
    pub fn on(self, size: usize, row: usize, col: usize) -> Vec<Vec<u32>> {
        let mut grid = blank(size);
        stamp(&mut grid, self, row, col);
        grid
    }
}

/// Write `pattern`'s live cells into `grid` at `(row, col)`, wrapping at
/// the edges.
pub fn stamp(grid: &mut [Vec<u32>], pattern: Pattern, row: usize, col: usize) {
    let n = grid.len();
    for &(dr, dc) in pattern.cells() {
        grid[(row + dr) % n][(col + dc) % n] = 1;
    }
}

/// A `size x size` grid of states drawn uniformly from `[0, num_states)`.
///
/// The same `(size, num_states, seed)` always yields the same grid.
pub fn random_grid(size: usize, num_states: u32, seed: u64) -> Vec<Vec<u32>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..size)
        .map(|_| {
            (0..size)
                .map(|_| rng.random_range(0..num_states.max(1)))
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blinker_stamp() {
        assert_eq!(
            Pattern::Blinker.on(3, 0, 0),
            vec![vec![0, 1, 0], vec![0, 1, 0], vec![0, 1, 0]]
        );
    }

    #[test]
    fn stamp_wraps() {
        let grid = Pattern::Block.on(3, 2, 2);
        assert_eq!(grid, vec![vec![1, 0, 1], vec![0, 0, 0], vec![1, 0, 1]]);
    }

    #[test]
    fn random_grid_is_seeded() {
        let a = random_grid(16, 3, 42);
        let b = random_grid(16, 3, 42);
        let c = random_grid(16, 3, 43);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.iter().flatten().all(|&s| s < 3));
    }
}
