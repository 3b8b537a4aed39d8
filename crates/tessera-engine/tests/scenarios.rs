//! End-to-end board scenarios with known outcomes.

use tessera_core::{grid_hash, GridAccess, StateId, TickId};
use tessera_engine::{Board, BoardConfig, ConfigError};
use tessera_rule::{presets, RuleTable};
use tessera_space::{Bucket, EdgeMode};
use tessera_test_utils::{blank, MockGrid, Pattern};

fn life(grid: Vec<Vec<u32>>, edge_mode: EdgeMode) -> Board {
    Board::from_parts(
        grid.len(),
        grid,
        presets::conway(),
        Bucket::moore(),
        edge_mode,
        2,
    )
    .unwrap()
}

// ── Life ────────────────────────────────────────────────────────────

#[test]
fn blinker_flips_to_horizontal() {
    let mut board = life(
        vec![vec![0, 1, 0], vec![0, 1, 0], vec![0, 1, 0]],
        EdgeMode::NoCheck,
    );
    board.advance();
    assert_eq!(
        board.snapshot().to_rows(),
        vec![vec![0, 0, 0], vec![1, 1, 1], vec![0, 0, 0]]
    );
    assert_eq!(board.snapshot().to_string(), "0 0 0\n1 1 1\n0 0 0");
}

#[test]
fn text_rules_match_preset() {
    let table = RuleTable::parse_rows(&[
        ["'def'", "surrounding[1] == 3"],
        ["surrounding[1] < 2 or surrounding[1] > 3", "'def'"],
    ])
    .unwrap();
    let mut config = BoardConfig::blank(8, table);
    config.initial_grid = Pattern::Toad.on(8, 3, 2);
    let mut parsed = Board::new(config).unwrap();
    let mut preset = life(Pattern::Toad.on(8, 3, 2), EdgeMode::NoCheck);

    for _ in 0..6 {
        parsed.advance();
        preset.advance();
        assert_eq!(parsed.state_hash(), preset.state_hash());
    }
}

#[test]
fn glider_moves_diagonally_on_torus() {
    let mut board = life(Pattern::Glider.on(8, 0, 0), EdgeMode::Wrap);
    board.advance_by(4);
    assert_eq!(board.snapshot().to_rows(), Pattern::Glider.on(8, 1, 1));
    assert_eq!(board.population(StateId(1)), 5);
}

#[test]
fn glider_circles_small_torus() {
    let start = Pattern::Glider.on(5, 0, 0);
    let mut board = life(start.clone(), EdgeMode::Wrap);
    board.advance_by(20);
    assert_eq!(board.tick_id(), TickId(20));
    assert_eq!(board.snapshot().to_rows(), start);
}

#[test]
fn glider_settles_in_no_check_corner() {
    let mut board = life(Pattern::Glider.on(6, 0, 0), EdgeMode::NoCheck);
    board.advance_by(40);
    assert_eq!(board.snapshot().to_rows(), Pattern::Block.on(6, 4, 4));
}

#[test]
fn empty_board_stays_empty() {
    let mut board = Board::new(BoardConfig::default()).unwrap();
    board.advance_by(3);
    assert_eq!(board.population(StateId(0)), 100);
    assert_eq!(board.last_metrics().transitions, 0);
}

// ── Multi-state ─────────────────────────────────────────────────────

#[test]
fn brians_brain_pair() {
    let mut grid = blank(4);
    grid[1][1] = 1;
    grid[1][2] = 1;
    let mut board = Board::from_parts(
        4,
        grid,
        presets::brians_brain(),
        Bucket::moore(),
        EdgeMode::NoCheck,
        3,
    )
    .unwrap();

    board.advance();
    assert_eq!(
        board.snapshot().to_rows(),
        vec![
            vec![0, 1, 1, 0],
            vec![0, 2, 2, 0],
            vec![0, 1, 1, 0],
            vec![0, 0, 0, 0],
        ]
    );
    board.advance();
    assert_eq!(
        board.snapshot().to_rows(),
        vec![
            vec![0, 2, 2, 0],
            vec![1, 0, 0, 1],
            vec![0, 2, 2, 0],
            vec![0, 1, 1, 0],
        ]
    );
}

// ── Hashing ─────────────────────────────────────────────────────────

#[test]
fn state_hash_matches_independent_grid() {
    let start = Pattern::Glider.on(8, 0, 0);
    let mut board = life(start.clone(), EdgeMode::Wrap);
    assert_eq!(board.state_hash(), grid_hash(&MockGrid::new(start)));

    board.advance_by(4);
    let expected = MockGrid::new(Pattern::Glider.on(8, 1, 1));
    assert_eq!(board.state_hash(), grid_hash(&expected));
    assert_eq!(grid_hash(&board.snapshot()), grid_hash(&expected));
}

#[test]
fn snapshot_reads_like_mock() {
    let mut board = life(blank(5), EdgeMode::NoCheck);
    let mut mock = MockGrid::zeros(5);
    for col in 1..4 {
        board.set(2, col, StateId(1)).unwrap();
        mock.set(2, col, 1);
    }
    let view = board.snapshot();
    assert_eq!(view.grid_size(), mock.grid_size());
    for row in 0..6 {
        for col in 0..6 {
            assert_eq!(view.state_at(row, col), mock.state_at(row, col));
        }
    }
    assert_eq!(view.to_rows(), mock.rows());

    board.advance();
    assert_ne!(board.state_hash(), grid_hash(&mock));
    mock.set(2, 1, 0);
    mock.set(2, 3, 0);
    mock.set(1, 2, 1);
    mock.set(3, 2, 1);
    assert_eq!(board.state_hash(), grid_hash(&mock));
}

// ── Configuration failures ──────────────────────────────────────────

#[test]
fn out_of_range_initial_state_fails() {
    let result = Board::from_parts(
        3,
        vec![vec![0, 1, 0], vec![0, 2, 0], vec![0, 1, 0]],
        presets::conway(),
        Bucket::moore(),
        EdgeMode::NoCheck,
        2,
    );
    match result {
        Err(ConfigError::InitialStateOutOfRange { row: 1, col: 1, state: 2, .. }) => {}
        other => panic!("expected InitialStateOutOfRange, got {other:?}"),
    }
}

#[test]
fn table_size_mismatch_fails() {
    let result = Board::from_parts(
        2,
        blank(2),
        presets::brians_brain(),
        Bucket::moore(),
        EdgeMode::Wrap,
        2,
    );
    match result {
        Err(ConfigError::RuleTableStates { expected: 2, found: 3 }) => {}
        other => panic!("expected RuleTableStates, got {other:?}"),
    }
}
