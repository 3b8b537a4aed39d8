//! Tessera: a generalized cellular-automaton engine.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Tessera sub-crates. For most users, adding `tessera` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tessera::prelude::*;
//!
//! // Brian's Brain on a 4x4 board with two firing cells.
//! let mut grid = vec![vec![0; 4]; 4];
//! grid[1][1] = 1;
//! grid[1][2] = 1;
//! let mut board = Board::from_parts(
//!     4,
//!     grid,
//!     tessera::rule::presets::brians_brain(),
//!     Bucket::moore(),
//!     EdgeMode::NoCheck,
//!     3,
//! )
//! .unwrap();
//!
//! board.advance();
//! assert_eq!(board.population(StateId(2)), 2);
//! assert_eq!(board.tick_id(), TickId(1));
//!
//! // Custom rules in the textual predicate language.
//! let table = RuleTable::parse_rows(&[
//!     ["def", "surrounding[1] == 3"],
//!     ["surrounding[1] < 2 or surrounding[1] > 3", "def"],
//! ])
//! .unwrap();
//! assert_eq!(table, tessera::rule::presets::conway());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tessera-core` | IDs, cell errors, the `GridAccess` trait, grid hashing |
//! | [`space`] | `tessera-space` | Edge modes, offset buckets, the square lattice |
//! | [`rule`] | `tessera-rule` | Predicates, the predicate parser, rule tables, presets |
//! | [`engine`] | `tessera-engine` | Board configuration and the board engine |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`tessera-core`).
pub use tessera_core as types;

/// Edge modes, buckets, and neighbour resolution (`tessera-space`).
pub use tessera_space as space;

/// Transition predicates and rule tables (`tessera-rule`).
///
/// Ready-made tables live in [`rule::presets`].
pub use tessera_rule as rule;

/// The board engine (`tessera-engine`).
pub use tessera_engine as engine;

/// Common imports for typical Tessera usage.
///
/// ```rust
/// use tessera::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use tessera_core::{CellError, GridAccess, StateId, TickId};

    // Space
    pub use tessera_space::{Bucket, EdgeMode, Offset};

    // Rules
    pub use tessera_rule::{CmpOp, CountExpr, Predicate, RuleError, RuleTable};

    // Engine
    pub use tessera_engine::{AdvanceMetrics, Board, BoardConfig, ConfigError, GridView};
}
