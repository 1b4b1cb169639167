//! Minimax / Alpha-Beta Engine
//!
//! Depth-first adversarial search over m,n,k boards with a wall-clock budget,
//! per-player depth allowances and pluggable cutoff heuristics. This is the
//! reference engine for the core's [`Engine`] interface.

mod eval;
mod search;

use std::time::Instant;

use tracing::debug;

use mnk_core::{
    Algorithm, Board, Engine, EvalStats, Heuristic, SearchLimits, SearchResult, StatsCollector,
};

/// Search engine running either plain minimax or alpha-beta pruning.
///
/// The engine owns the leaf-evaluation statistics for the current game: every
/// search records its leaves and its own wall-clock time, and the reporting
/// boundary drains the per-round window after each ply.
#[derive(Debug, Clone)]
pub struct MinimaxEngine {
    algorithm: Algorithm,
    heuristic: Heuristic,
    stats: StatsCollector,
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(Algorithm::AlphaBeta, Heuristic::LinePotential)
    }
}

impl MinimaxEngine {
    pub fn new(algorithm: Algorithm, heuristic: Heuristic) -> Self {
        Self {
            algorithm,
            heuristic,
            stats: StatsCollector::new(),
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    /// Cumulative statistics for the current game.
    pub fn stats(&self) -> &EvalStats {
        self.stats.cumulative()
    }

    /// Statistics gathered since the last drain.
    pub fn round_stats(&self) -> &EvalStats {
        self.stats.round()
    }

    /// Hand out the per-round statistics and start a fresh round window.
    pub fn drain_round_stats(&mut self) -> EvalStats {
        self.stats.drain_round()
    }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, board: &Board, limits: SearchLimits) -> SearchResult {
        limits.start();
        let started = Instant::now();

        let result = search::pick_best_move(
            board,
            board.side_to_move(),
            &limits,
            self.algorithm,
            self.heuristic,
            &mut self.stats,
        );

        let elapsed = started.elapsed().as_secs_f64();
        self.stats.record_search_time(elapsed);
        debug!(
            algorithm = ?self.algorithm,
            heuristic = ?self.heuristic,
            depth = result.depth,
            leaves = result.leaves,
            stopped = result.stopped,
            elapsed,
            "search finished"
        );
        result
    }

    fn name(&self) -> &str {
        match self.algorithm {
            Algorithm::Minimax => "Minimax v1.0",
            Algorithm::AlphaBeta => "AlphaBeta v1.0",
        }
    }

    fn new_game(&mut self) {
        self.stats.reset();
    }

    fn set_option(&mut self, name: &str, value: &str) -> bool {
        match name {
            "algorithm" => match value.parse() {
                Ok(algorithm) => {
                    self.algorithm = algorithm;
                    true
                }
                Err(_) => false,
            },
            "heuristic" => match value.parse() {
                Ok(heuristic) => {
                    self.heuristic = heuristic;
                    true
                }
                Err(_) => false,
            },
            _ => false,
        }
    }
}

// Re-export for direct use if needed
pub use eval::{evaluate, evaluate_adjacency, evaluate_line_potential};
pub use search::pick_best_move;
