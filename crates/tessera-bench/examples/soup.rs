//! Run a seeded Life soup and report how it settles.
//!
//! Demonstrates: build a profile → Board → advance → read metrics and
//! populations each generation.
//!
//! Run with:
//!   cargo run -p tessera-bench --example soup

use tessera_bench::reference_profile;
use tessera_core::StateId;
use tessera_engine::Board;

fn main() {
    println!("=== Tessera Soup Example ===\n");

    let mut board = Board::new(reference_profile(42)).unwrap();
    println!(
        "{}x{} board, {} live cells at start",
        board.grid_size(),
        board.grid_size(),
        board.population(StateId(1)),
    );

    let mut total_us = 0;
    for generation in 1..=200u64 {
        board.advance();
        let m = board.last_metrics();
        total_us += m.total_us;
        if generation % 25 == 0 {
            println!(
                "gen {generation:>3}: live={:>5} changed={:>5} activity={:.3} ({} us)",
                board.population(StateId(1)),
                m.transitions,
                m.activity(),
                m.total_us,
            );
        }
    }

    println!(
        "\n200 generations in {:.2} ms, final hash {:016x}",
        total_us as f64 / 1000.0,
        board.state_hash(),
    );
}
