//! Test fixtures and mock types for Tessera development.
//!
//! Provides a [`MockGrid`] implementation of [`GridAccess`], standard
//! patterns, and seeded random soups in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{blank, random_grid, stamp, Pattern};

use tessera_core::{GridAccess, StateId};

/// Mock implementation of [`GridAccess`].
///
/// Backed by nested rows of raw state indices, so tests can feed the
/// same literal grids they build boards from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MockGrid {
    rows: Vec<Vec<u32>>,
}

impl MockGrid {
    /// # Panics
    ///
    /// Panics if `rows` is not square.
    pub fn new(rows: Vec<Vec<u32>>) -> Self {
        let n = rows.len();
        assert!(
            rows.iter().all(|r| r.len() == n),
            "MockGrid rows must be {n} long"
        );
        Self { rows }
    }

    pub fn zeros(size: usize) -> Self {
        Self::new(blank(size))
    }

    pub fn set(&mut self, row: usize, col: usize, state: u32) {
        self.rows[row][col] = state;
    }

    pub fn rows(&self) -> &[Vec<u32>] {
        &self.rows
    }
}

impl GridAccess for MockGrid {
    fn grid_size(&self) -> usize {
        self.rows.len()
    }

    fn state_at(&self, row: usize, col: usize) -> Option<StateId> {
        self.rows.get(row)?.get(col).map(|&s| StateId(s))
    }
}
