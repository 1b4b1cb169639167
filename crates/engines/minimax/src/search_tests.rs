use super::*;
use std::time::Duration;

use mnk_core::{Board, Move, Player, SearchLimits, StatsCollector};

fn solve(
    board: &Board,
    player: Player,
    algorithm: Algorithm,
    heuristic: Heuristic,
    limits: SearchLimits,
) -> SearchResult {
    let mut stats = StatsCollector::new();
    limits.start();
    pick_best_move(board, player, &limits, algorithm, heuristic, &mut stats)
}

#[test]
fn test_finds_the_immediate_winning_move() {
    let board = Board::from_rows(3, &["XX.", ".O.", "..O"]).unwrap();
    for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta] {
        let result = solve(
            &board,
            Player::X,
            algorithm,
            Heuristic::None,
            SearchLimits::depth(9),
        );
        assert_eq!(result.best_move, Some(Move::new(2, 0)));
        assert_eq!(result.score, 1000, "a win scores ten to the power of k");
    }
}

#[test]
fn test_blocks_the_opponent_threat() {
    // X threatens (2, 0); any other O reply loses on the next ply.
    let board = Board::from_rows(3, &["XX.", "O..", "..."]).unwrap();
    let result = solve(
        &board,
        Player::O,
        Algorithm::AlphaBeta,
        Heuristic::None,
        SearchLimits::depth(9),
    );
    assert_eq!(result.best_move, Some(Move::new(2, 0)));
}

#[test]
fn test_empty_board_is_a_theoretical_draw() {
    let board = Board::new(3, 3, &[]).unwrap();
    let result = solve(
        &board,
        Player::X,
        Algorithm::AlphaBeta,
        Heuristic::None,
        SearchLimits::depth(9),
    );
    assert_eq!(result.score, 0, "perfect play on 3x3 draws");
    assert!(result.best_move.is_some());
    assert!(!result.stopped);
}

#[test]
fn test_minimax_and_alpha_beta_agree_when_solved_exactly() {
    let board = Board::from_rows(3, &["X.O", ".X.", "..."]).unwrap();
    let minimax = solve(
        &board,
        Player::O,
        Algorithm::Minimax,
        Heuristic::None,
        SearchLimits::depth(9),
    );
    let alpha_beta = solve(
        &board,
        Player::O,
        Algorithm::AlphaBeta,
        Heuristic::None,
        SearchLimits::depth(9),
    );

    assert_eq!(minimax.score, alpha_beta.score);
    assert_eq!(minimax.best_move, alpha_beta.best_move);
}

#[test]
fn test_alpha_beta_evaluates_fewer_leaves() {
    let board = Board::from_rows(3, &["X..", ".O.", "..."]).unwrap();
    let minimax = solve(
        &board,
        Player::X,
        Algorithm::Minimax,
        Heuristic::None,
        SearchLimits::depth(9),
    );
    let alpha_beta = solve(
        &board,
        Player::X,
        Algorithm::AlphaBeta,
        Heuristic::None,
        SearchLimits::depth(9),
    );

    assert!(alpha_beta.leaves <= minimax.leaves);
    assert!(
        alpha_beta.leaves < minimax.leaves,
        "pruning must fire somewhere in a seven-cell search"
    );
}

#[test]
fn test_depth_beyond_empty_cells_is_clamped() {
    let board = Board::from_rows(3, &["XOX", "OX.", ".O."]).unwrap();
    let exact = solve(
        &board,
        Player::X,
        Algorithm::Minimax,
        Heuristic::None,
        SearchLimits::depth(3),
    );
    let oversized = solve(
        &board,
        Player::X,
        Algorithm::Minimax,
        Heuristic::None,
        SearchLimits::depth(100),
    );

    assert_eq!(exact.score, oversized.score);
    assert_eq!(exact.best_move, oversized.best_move);
    assert_eq!(exact.leaves, oversized.leaves);
    assert_eq!(oversized.depth, 3, "reported depth is the clamped depth");
}

#[test]
fn test_terminal_position_returns_no_move() {
    let board = Board::from_rows(3, &["XOX", "XOO", "OXX"]).unwrap();
    let result = solve(
        &board,
        Player::X,
        Algorithm::AlphaBeta,
        Heuristic::None,
        SearchLimits::depth(9),
    );
    assert_eq!(result.best_move, None);
    assert_eq!(result.score, 0);
    assert_eq!(result.leaves, 1, "the terminal root is the only leaf");
}

#[test]
fn test_won_position_returns_no_move_and_the_win_score() {
    let board = Board::from_rows(3, &["XXX", "OO.", "..."]).unwrap();
    let result = solve(
        &board,
        Player::O,
        Algorithm::Minimax,
        Heuristic::None,
        SearchLimits::depth(9),
    );
    assert_eq!(result.best_move, None);
    assert_eq!(result.score, 1000);
}

#[test]
fn test_callers_board_is_untouched() {
    let board = Board::from_rows(3, &["X..", ".O.", "..."]).unwrap();
    let snapshot = board.clone();
    let _ = solve(
        &board,
        Player::X,
        Algorithm::AlphaBeta,
        Heuristic::LinePotential,
        SearchLimits::depth(4),
    );
    assert_eq!(board, snapshot);
}

#[test]
fn test_depth_cutoff_uses_the_heuristic() {
    // Depth 1 with the whole-board heuristic still picks the strongest
    // opening cell on an empty 4x4 board: the center maximizes line coverage.
    let board = Board::new(4, 3, &[]).unwrap();
    let result = solve(
        &board,
        Player::X,
        Algorithm::AlphaBeta,
        Heuristic::LinePotential,
        SearchLimits::depth(1),
    );
    let mv = result.best_move.unwrap();
    assert!(
        (1..=2).contains(&mv.x) && (1..=2).contains(&mv.y),
        "expected a central opening, got {mv}"
    );
}

#[test]
fn test_per_player_depths_apply_to_the_simulated_side() {
    // X searches deep, O is cut at one ply; the search must still finish and
    // both configurations must agree on the forced win for X.
    let board = Board::from_rows(3, &["XX.", "OO.", "..."]).unwrap();
    let result = solve(
        &board,
        Player::X,
        Algorithm::AlphaBeta,
        Heuristic::Adjacency,
        SearchLimits::per_player(9, 1),
    );
    assert_eq!(result.best_move, Some(Move::new(2, 0)));
    assert_eq!(result.score, 1000);
}

#[test]
fn test_expired_budget_degrades_to_heuristic_leaves() {
    // A budget below the safety margin expires at the first node check, so
    // every root reply is a heuristic leaf and the search still yields a move.
    let board = Board::new(5, 4, &[]).unwrap();
    let limits = SearchLimits::depth(25).with_time(Duration::from_millis(1));
    let result = solve(
        &board,
        Player::X,
        Algorithm::Minimax,
        Heuristic::LinePotential,
        limits,
    );
    assert!(result.stopped, "the time cutoff must be reported");
    assert!(result.best_move.is_some());
    assert_eq!(
        result.leaves,
        25,
        "one heuristic leaf per root reply once the clock is out"
    );
}

#[test]
fn test_leaf_evaluations_are_recorded_per_depth() {
    let board = Board::from_rows(3, &["XOX", "OX.", ".O."]).unwrap();
    let mut stats = StatsCollector::new();
    let limits = SearchLimits::depth(2);
    limits.start();
    let result = pick_best_move(
        &board,
        Player::X,
        &limits,
        Algorithm::Minimax,
        Heuristic::Adjacency,
        &mut stats,
    );

    assert_eq!(stats.cumulative().total, result.leaves);
    assert!(stats.cumulative().per_depth.keys().all(|&d| d <= 2));
    assert!(stats.round().total > 0);
}
