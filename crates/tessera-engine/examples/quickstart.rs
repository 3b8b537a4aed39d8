//! Tessera Quickstart: a complete, minimal board from scratch.
//!
//! Demonstrates:
//!   1. Writing a rule table in the textual predicate language
//!   2. Building a BoardConfig and Board
//!   3. Editing cells, advancing, and printing snapshots
//!   4. Reading per-advance metrics
//!
//! Run with:
//!   cargo run --example quickstart

use tessera_core::StateId;
use tessera_engine::{Board, BoardConfig};
use tessera_rule::RuleTable;
use tessera_space::{Bucket, EdgeMode};

fn main() {
    // Conway's Life, written out by hand. Row = current state, column =
    // candidate state; "def" entries never fire.
    let rules = RuleTable::parse_rows(&[
        ["def", "surrounding[1] == 3"],
        ["surrounding[1] < 2 or surrounding[1] > 3", "def"],
    ])
    .unwrap();

    let config = BoardConfig {
        grid_size: 6,
        initial_grid: vec![vec![0; 6]; 6],
        rule_table: rules,
        bucket: Bucket::moore(),
        edge_mode: EdgeMode::Wrap,
        num_states: 2,
    };
    let mut board = Board::new(config).unwrap();

    // A glider in the top-left corner.
    for (x, y) in [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)] {
        board.set(x, y, StateId(1)).unwrap();
    }

    println!("generation {}:\n{}\n", board.tick_id(), board.snapshot());
    for _ in 0..4 {
        board.advance();
        let m = board.last_metrics();
        println!(
            "generation {} ({} cells changed, {} us):\n{}\n",
            board.tick_id(),
            m.transitions,
            m.total_us,
            board.snapshot(),
        );
    }

    // Out-of-range edits are rejected and leave the board untouched.
    if let Err(e) = board.set(6, 0, StateId(1)) {
        println!("rejected: {e}");
    }
    if let Err(e) = board.set(0, 0, StateId(2)) {
        println!("rejected: {e}");
    }
}
