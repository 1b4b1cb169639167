//! Depth-first search over the move tree: plain minimax and alpha-beta.
//!
//! Both procedures visit empty cells in the board's row-major order, keep the
//! first move among equal scores, and treat X as the maximizing side. A node
//! resolves to a leaf in one of three ways: a true terminal position, the
//! simulated side's depth allowance running out, or the wall-clock budget
//! expiring. Every leaf is recorded in the statistics collector at the depth
//! it occurred.

use tracing::trace;

use mnk_core::{
    evaluate_terminal, Algorithm, Board, Heuristic, Move, Player, SearchLimits, SearchResult,
    StatsCollector, TerminalState, TimeControl,
};

use crate::eval::{evaluate, pow10};

/// State threaded through one search call.
struct SearchCtx<'a> {
    depth_x: u32,
    depth_o: u32,
    heuristic: Heuristic,
    tc: &'a TimeControl,
    stats: &'a mut StatsCollector,
    leaves: u64,
    stopped: bool,
}

impl SearchCtx<'_> {
    #[inline]
    fn max_depth_for(&self, side: Player) -> u32 {
        match side {
            Player::X => self.depth_x,
            Player::O => self.depth_o,
        }
    }

    #[inline]
    fn record_leaf(&mut self, depth: u32) {
        self.leaves += 1;
        self.stats.record_leaf(depth);
    }
}

/// Search the position and return the best move for `player`.
///
/// Probes a working copy of the board, so the caller's board is untouched.
/// Both depth allowances are clamped to the number of empty cells, so a
/// shallow endgame is solved exactly. The time control is expected to be
/// started by the caller.
pub fn pick_best_move(
    board: &Board,
    player: Player,
    limits: &SearchLimits,
    algorithm: Algorithm,
    heuristic: Heuristic,
    stats: &mut StatsCollector,
) -> SearchResult {
    let mut work = board.clone();
    let remaining = work.remaining_empty_count() as u32;

    let mut ctx = SearchCtx {
        depth_x: limits.depth_x.min(remaining),
        depth_o: limits.depth_o.min(remaining),
        heuristic,
        tc: &limits.time_control,
        stats,
        leaves: 0,
        stopped: false,
    };
    let depth_used = ctx.max_depth_for(player);

    let terminal = evaluate_terminal(&work);
    if terminal.is_terminal() {
        ctx.record_leaf(0);
        return SearchResult {
            best_move: None,
            score: terminal_score(work.win_size(), terminal),
            depth: depth_used,
            leaves: ctx.leaves,
            stopped: false,
        };
    }

    let maximizing = player == Player::X;
    let mut best_move = None;
    let mut best_score = if maximizing { i64::MIN } else { i64::MAX };
    let mut alpha = i64::MIN;
    let mut beta = i64::MAX;

    let mut moves = Vec::with_capacity(remaining as usize);
    work.empty_cells_into(&mut moves);

    for mv in moves {
        work.place(mv, player);
        let value = match algorithm {
            Algorithm::Minimax => minimax(&mut work, player.other(), 1, Some(mv), &mut ctx),
            Algorithm::AlphaBeta => {
                alpha_beta(&mut work, player.other(), 1, alpha, beta, Some(mv), &mut ctx)
            }
        };
        work.unplace(mv);
        trace!(x = mv.x, y = mv.y, value, "root move evaluated");

        if maximizing {
            if value > best_score {
                best_score = value;
                best_move = Some(mv);
            }
            if best_score > alpha {
                alpha = best_score;
            }
        } else {
            if value < best_score {
                best_score = value;
                best_move = Some(mv);
            }
            if best_score < beta {
                beta = best_score;
            }
        }
        // The opposite root bound stays infinite, so the window never closes
        // here; narrowing it only helps the children prune.
    }

    SearchResult {
        best_move,
        score: best_score,
        depth: depth_used,
        leaves: ctx.leaves,
        stopped: ctx.stopped,
    }
}

/// Exhaustive value of the position for the side to move at this node.
fn minimax(
    board: &mut Board,
    side: Player,
    depth: u32,
    last: Option<Move>,
    ctx: &mut SearchCtx<'_>,
) -> i64 {
    let terminal = evaluate_terminal(board);
    if terminal.is_terminal() {
        ctx.record_leaf(depth);
        return terminal_score(board.win_size(), terminal);
    }

    let time_cut = ctx.tc.check_time();
    if time_cut {
        ctx.stopped = true;
    }
    if time_cut || depth >= ctx.max_depth_for(side) {
        ctx.record_leaf(depth);
        return evaluate(board, ctx.heuristic, last);
    }

    let maximizing = side == Player::X;
    let mut best = if maximizing { i64::MIN } else { i64::MAX };

    let mut moves = Vec::new();
    board.empty_cells_into(&mut moves);
    for mv in moves {
        board.place(mv, side);
        let value = minimax(board, side.other(), depth + 1, Some(mv), ctx);
        board.unplace(mv);

        if maximizing {
            if value > best {
                best = value;
            }
        } else if value < best {
            best = value;
        }
    }
    best
}

/// Same traversal and cutoff policy as [`minimax`], with an `(alpha, beta)`
/// window threaded through the recursion. Siblings are abandoned once the
/// window closes; only provably irrelevant subtrees are skipped, so the
/// returned value matches minimax wherever minimax completes uncut.
#[allow(clippy::too_many_arguments)]
fn alpha_beta(
    board: &mut Board,
    side: Player,
    depth: u32,
    mut alpha: i64,
    mut beta: i64,
    last: Option<Move>,
    ctx: &mut SearchCtx<'_>,
) -> i64 {
    let terminal = evaluate_terminal(board);
    if terminal.is_terminal() {
        ctx.record_leaf(depth);
        return terminal_score(board.win_size(), terminal);
    }

    let time_cut = ctx.tc.check_time();
    if time_cut {
        ctx.stopped = true;
    }
    if time_cut || depth >= ctx.max_depth_for(side) {
        ctx.record_leaf(depth);
        return evaluate(board, ctx.heuristic, last);
    }

    let maximizing = side == Player::X;
    let mut best = if maximizing { i64::MIN } else { i64::MAX };

    let mut moves = Vec::new();
    board.empty_cells_into(&mut moves);
    for mv in moves {
        board.place(mv, side);
        let value = alpha_beta(board, side.other(), depth + 1, alpha, beta, Some(mv), ctx);
        board.unplace(mv);

        if maximizing {
            if value > best {
                best = value;
            }
            if best > alpha {
                alpha = best;
            }
        } else {
            if value < best {
                best = value;
            }
            if best < beta {
                beta = best;
            }
        }
        if alpha >= beta {
            break;
        }
    }
    best
}

/// Score of a decided position: `+10^k` for an X win, `-10^k` for an O win,
/// 0 for a draw.
fn terminal_score(win_size: u8, terminal: TerminalState) -> i64 {
    match terminal {
        TerminalState::XWins => pow10(u32::from(win_size)),
        TerminalState::OWins => -pow10(u32::from(win_size)),
        TerminalState::Draw | TerminalState::NotTerminal => 0,
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
