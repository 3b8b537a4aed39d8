//! Transition rules for Tessera boards.
//!
//! A board's behaviour is a [`RuleTable`]: a `K x K` matrix whose entry
//! `[from][to]` is a [`Predicate`] over the cell's neighbour count
//! vector. Predicates are a closed expression tree evaluated at advance
//! time; the [`parse`] module compiles the textual form
//! (`"surrounding[1] < 2 or surrounding[1] > 3"`) into that tree without
//! ever executing configuration text as code.
//!
//! # Resolution order
//!
//! For a cell in state `s`, candidates are scanned in ascending index,
//! skipping `s`. The first predicate that holds wins; if none does, the
//! cell stays in `s`. See [`RuleTable::next_state`].
//!
//! # Presets
//!
//! [`presets`] covers Conway's Life, other B/S life-like rules and
//! Brian's Brain.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod parse;
pub mod predicate;
pub mod presets;
pub mod table;

pub use error::RuleError;
pub use parse::{ParseError, MAX_DEPTH};
pub use predicate::{CmpOp, CountExpr, Predicate};
pub use table::RuleTable;
