//! The `K x K` transition table.

use std::fmt;

use tessera_core::StateId;

use crate::error::RuleError;
use crate::predicate::Predicate;

/// A square matrix of transition predicates indexed `[from][to]`.
///
/// Entry `[s][c]` decides whether a cell currently in state `s` moves to
/// candidate state `c`. Diagonal entries are never consulted. Entries
/// are stored row-major in a single `Vec`.
///
/// # Examples
///
/// ```
/// use tessera_core::StateId;
/// use tessera_rule::RuleTable;
///
/// let table = RuleTable::parse_rows(&[
///     ["def", "surrounding[1] == 3"],
///     ["surrounding[1] < 2 or surrounding[1] > 3", "def"],
/// ])
/// .unwrap();
///
/// // A dead cell with three live neighbours is born.
/// assert_eq!(table.next_state(StateId(0), &[5, 3]), StateId(1));
/// // A live cell with two live neighbours survives.
/// assert_eq!(table.next_state(StateId(1), &[6, 2]), StateId(1));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleTable {
    num_states: u32,
    entries: Vec<Predicate>,
}

impl RuleTable {
    /// A table over `num_states` states in which nothing ever fires.
    pub fn new(num_states: u32) -> Self {
        let k = num_states as usize;
        Self {
            num_states,
            entries: vec![Predicate::Never; k * k],
        }
    }

    /// Build from explicit rows. Every row must have as many entries as
    /// there are rows, and no predicate may read a state outside the table.
    pub fn from_rows(rows: Vec<Vec<Predicate>>) -> Result<Self, RuleError> {
        let k = rows.len();
        for (row, entries) in rows.iter().enumerate() {
            if entries.len() != k {
                return Err(RuleError::DimensionMismatch {
                    expected: k,
                    row,
                    found: entries.len(),
                });
            }
        }
        let num_states = u32::try_from(k).map_err(|_| RuleError::DimensionMismatch {
            expected: u32::MAX as usize,
            row: 0,
            found: k,
        })?;
        let table = Self {
            num_states,
            entries: rows.into_iter().flatten().collect(),
        };
        table.validate()?;
        Ok(table)
    }

    /// Parse a table of textual predicates.
    ///
    /// Each cell is compiled with [`Predicate::parse`]; the first failure
    /// is reported with its `[from][to]` position.
    pub fn parse_rows<R, S>(rows: &[R]) -> Result<Self, RuleError>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut parsed = Vec::with_capacity(rows.len());
        for (from, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let mut out = Vec::with_capacity(row.len());
            for (to, text) in row.iter().enumerate() {
                let pred =
                    Predicate::parse(text.as_ref()).map_err(|source| RuleError::Parse {
                        from: StateId(from as u32),
                        to: StateId(to as u32),
                        source,
                    })?;
                out.push(pred);
            }
            parsed.push(out);
        }
        Self::from_rows(parsed)
    }

    /// Assemble from row-major entries already known to be in range.
    pub(crate) fn from_entries(num_states: u32, entries: Vec<Predicate>) -> Self {
        debug_assert_eq!(entries.len(), (num_states as usize).pow(2));
        Self {
            num_states,
            entries,
        }
    }

    /// Number of states `K`.
    pub fn num_states(&self) -> u32 {
        self.num_states
    }

    fn slot(&self, from: StateId, to: StateId) -> Result<usize, RuleError> {
        if from.0 >= self.num_states || to.0 >= self.num_states {
            return Err(RuleError::TransitionOutOfRange {
                from,
                to,
                num_states: self.num_states,
            });
        }
        Ok(from.index() * self.num_states as usize + to.index())
    }

    /// The predicate at `[from][to]`, or `None` if either index is out of range.
    pub fn get(&self, from: StateId, to: StateId) -> Option<&Predicate> {
        self.slot(from, to).ok().map(|i| &self.entries[i])
    }

    /// Replace the predicate at `[from][to]`.
    ///
    /// Setting a diagonal entry is allowed but has no effect on
    /// [`next_state`](Self::next_state).
    pub fn set(&mut self, from: StateId, to: StateId, pred: Predicate) -> Result<(), RuleError> {
        let i = self.slot(from, to)?;
        check_states(from, to, &pred, self.num_states)?;
        self.entries[i] = pred;
        Ok(())
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, from: StateId, to: StateId, pred: Predicate) -> Result<Self, RuleError> {
        self.set(from, to, pred)?;
        Ok(self)
    }

    /// All predicates leaving `from`, indexed by target state.
    pub fn row(&self, from: StateId) -> Option<&[Predicate]> {
        if from.0 >= self.num_states {
            return None;
        }
        let k = self.num_states as usize;
        let start = from.index() * k;
        Some(&self.entries[start..start + k])
    }

    /// Check that every predicate only reads states in `[0, K)`.
    pub fn validate(&self) -> Result<(), RuleError> {
        let k = self.num_states as usize;
        for (i, pred) in self.entries.iter().enumerate() {
            let from = StateId((i / k) as u32);
            let to = StateId((i % k) as u32);
            check_states(from, to, pred, self.num_states)?;
        }
        Ok(())
    }

    /// Resolve the successor of a cell in state `current` whose
    /// neighbourhood produced `counts`.
    ///
    /// Candidates are tried in ascending order, skipping `current`; the
    /// first whose predicate holds is returned. With no match the cell
    /// keeps its state. A `current` outside the table is returned as-is.
    pub fn next_state(&self, current: StateId, counts: &[u32]) -> StateId {
        let Some(row) = self.row(current) else {
            return current;
        };
        row.iter()
            .enumerate()
            .filter(|&(to, _)| to != current.index())
            .find(|(_, pred)| pred.eval(counts))
            .map_or(current, |(to, _)| StateId(to as u32))
    }
}

fn check_states(
    from: StateId,
    to: StateId,
    pred: &Predicate,
    num_states: u32,
) -> Result<(), RuleError> {
    match pred.max_state() {
        Some(state) if state.0 >= num_states => Err(RuleError::StateOutOfRange {
            from,
            to,
            state,
            num_states,
        }),
        _ => Ok(()),
    }
}

impl fmt::Display for RuleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let k = self.num_states as usize;
        let mut first = true;
        for (i, pred) in self.entries.iter().enumerate() {
            let (from, to) = (i / k, i % k);
            if from == to || pred.is_never() {
                continue;
            }
            if !first {
                writeln!(f)?;
            }
            first = false;
            write!(f, "{from} -> {to}: {pred}")?;
        }
        Ok(())
    }
}
