//! The synchronous advance kernel.
//!
//! Reads one generation, writes the next into a separate buffer. Every
//! cell sees only the prior generation, so evaluation order does not
//! matter.

use tessera_core::{Counts, StateId};
use tessera_rule::RuleTable;
use tessera_space::{Bucket, SquareLattice};

/// Work counts from one pass of [`advance_cells`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct PassStats {
    pub(crate) cells_evaluated: u64,
    pub(crate) transitions: u64,
    pub(crate) neighbours_skipped: u64,
}

/// Tally the states `bucket` reaches from `(row, col)` into `counts`.
///
/// The caller must size `counts` to `num_states` and zero it beforehand;
/// entries are only incremented here. Returns the number of offsets that
/// left a `NoCheck` lattice.
pub(crate) fn count_neighbours(
    lattice: &SquareLattice,
    bucket: &Bucket,
    cells: &[StateId],
    row: usize,
    col: usize,
    counts: &mut Counts,
) -> u64 {
    let mut skipped = 0;
    for &offset in bucket {
        match lattice.resolve(row, col, offset) {
            Some((r, c)) => {
                let state = cells[lattice.index(r, c)];
                // Grid states are validated to lie in [0, K).
                if let Some(n) = counts.get_mut(state.index()) {
                    *n += 1;
                }
            }
            None => skipped += 1,
        }
    }
    skipped
}

/// Compute the next generation of `current` into `next`.
///
/// `next` must be the same length as `current`. `counts` is scratch
/// space reused across cells.
pub(crate) fn advance_cells(
    lattice: &SquareLattice,
    bucket: &Bucket,
    table: &RuleTable,
    current: &[StateId],
    next: &mut [StateId],
    counts: &mut Counts,
) -> PassStats {
    debug_assert_eq!(current.len(), next.len());
    let size = lattice.size();
    let k = table.num_states() as usize;
    let mut stats = PassStats::default();

    for row in 0..size {
        for col in 0..size {
            let idx = lattice.index(row, col);
            counts.clear();
            counts.resize(k, 0);
            stats.neighbours_skipped +=
                count_neighbours(lattice, bucket, current, row, col, counts);

            let state = current[idx];
            let succ = table.next_state(state, counts.as_slice());
            if succ != state {
                stats.transitions += 1;
            }
            next[idx] = succ;
            stats.cells_evaluated += 1;
        }
    }
    stats
}
