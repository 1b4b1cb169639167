//! Static position evaluation for cutoff leaves.
//!
//! Both evaluators share one sign convention: positive favors X, negative
//! favors O. They are only consulted on non-terminal positions, so neither
//! needs to detect completed wins.

use mnk_core::{Board, Cell, Heuristic, Move, Player};

/// Offsets of the up-to-8 neighbors of a cell.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Dispatch to the configured evaluator.
///
/// `last` is the most recently placed coordinate; the adjacency evaluator
/// needs it, the others ignore it. With no last move (or `Heuristic::None`)
/// the estimate is 0.
pub fn evaluate(board: &Board, heuristic: Heuristic, last: Option<Move>) -> i64 {
    match heuristic {
        Heuristic::None => 0,
        Heuristic::Adjacency => match last {
            Some(mv) => evaluate_adjacency(board, mv),
            None => 0,
        },
        Heuristic::LinePotential => evaluate_line_potential(board),
    }
}

/// Move-local estimate: 1 for the just-placed cell plus 1 per neighbor
/// carrying the same mark, added for X and subtracted for O. Only the
/// neighborhood of `last` is inspected.
pub fn evaluate_adjacency(board: &Board, last: Move) -> i64 {
    let mark = match board.get(last.x, last.y) {
        Cell::Taken(player) => player,
        _ => return 0,
    };

    let mut same = 1i64;
    for (dx, dy) in NEIGHBOR_OFFSETS {
        let x = i32::from(last.x) + dx;
        let y = i32::from(last.y) + dy;
        if x < 0 || y < 0 || x >= i32::from(board.size()) || y >= i32::from(board.size()) {
            continue;
        }
        if board.get(x as u8, y as u8) == Cell::Taken(mark) {
            same += 1;
        }
    }

    match mark {
        Player::X => same,
        Player::O => -same,
    }
}

/// Whole-board estimate over every line long enough to win: a line where one
/// player strictly outnumbers the other contributes `10^count` toward that
/// player; a contested line with equal nonzero counts contributes `10^count`
/// as volatile territory. Blocked cells carry no mark and simply do not
/// count.
pub fn evaluate_line_potential(board: &Board) -> i64 {
    let mut score = 0i64;
    for_each_line_counts(board, |xs, os| {
        if xs > os {
            score = score.saturating_add(pow10(xs));
        } else if os > xs {
            score = score.saturating_sub(pow10(os));
        } else if xs > 0 {
            score = score.saturating_add(pow10(xs));
        }
    });
    score
}

/// `10^exp`, saturating instead of wrapping for degenerately long lines.
#[inline]
pub(crate) fn pow10(exp: u32) -> i64 {
    10i64.saturating_pow(exp)
}

/// Visit every row, column and diagonal of length at least `win_size`,
/// reporting how many X and O marks each carries. Same line families, same
/// order as the terminal scan.
fn for_each_line_counts(board: &Board, mut f: impl FnMut(u32, u32)) {
    let n = board.size();
    let k = board.win_size();

    let mut tally = |x0: u8, y0: u8, dx: i32, dy: i32, len: u8| {
        let mut xs = 0u32;
        let mut os = 0u32;
        for i in 0..i32::from(len) {
            let x = (i32::from(x0) + dx * i) as u8;
            let y = (i32::from(y0) + dy * i) as u8;
            match board.get(x, y) {
                Cell::Taken(Player::X) => xs += 1,
                Cell::Taken(Player::O) => os += 1,
                Cell::Empty | Cell::Blocked => {}
            }
        }
        f(xs, os);
    };

    // Rows and columns always qualify (k <= n).
    for y in 0..n {
        tally(0, y, 1, 0, n);
    }
    for x in 0..n {
        tally(x, 0, 0, 1, n);
    }
    // Down-right diagonals from the top edge, then the left edge.
    for x0 in 0..n {
        let len = n - x0;
        if len >= k {
            tally(x0, 0, 1, 1, len);
        }
    }
    for y0 in 1..n {
        let len = n - y0;
        if len >= k {
            tally(0, y0, 1, 1, len);
        }
    }
    // Down-left diagonals from the top edge, then the right edge.
    for x0 in 0..n {
        let len = x0 + 1;
        if len >= k {
            tally(x0, 0, -1, 1, len);
        }
    }
    for y0 in 1..n {
        let len = n - y0;
        if len >= k {
            tally(n - 1, y0, -1, 1, len);
        }
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
