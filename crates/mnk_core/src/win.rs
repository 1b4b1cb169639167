//! Terminal-state detection: does any row, column or diagonal carry an
//! unbroken run of `win_size` identical marks?

use crate::board::Board;
use crate::types::{Cell, Player};

/// Outcome query for a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TerminalState {
    XWins,
    OWins,
    Draw,
    NotTerminal,
}

impl TerminalState {
    pub fn is_terminal(self) -> bool {
        self != TerminalState::NotTerminal
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            TerminalState::XWins => Some(Player::X),
            TerminalState::OWins => Some(Player::O),
            _ => None,
        }
    }
}

/// Scan the whole board for a winning run.
///
/// Lines are visited in a fixed order — all rows, then all columns, then
/// down-right diagonals, then down-left diagonals — so that even a malformed
/// position holding two simultaneous wins reports deterministically (row wins
/// first). Only diagonals at least `win_size` long are scanned. Blocked cells
/// break any run crossing them.
///
/// Returns `Draw` iff no winning run exists and the board is full,
/// `NotTerminal` iff no winning run exists and an empty cell remains.
pub fn evaluate_terminal(board: &Board) -> TerminalState {
    let n = board.size();
    let k = board.win_size();

    // Rows.
    for y in 0..n {
        if let Some(p) = scan_run((0..n).map(|x| board.get(x, y)), k) {
            return win_of(p);
        }
    }

    // Columns.
    for x in 0..n {
        if let Some(p) = scan_run((0..n).map(|y| board.get(x, y)), k) {
            return win_of(p);
        }
    }

    // Down-right diagonals, starting on the top edge then the left edge.
    for x0 in 0..n {
        let len = n - x0;
        if len >= k {
            if let Some(p) = scan_run((0..len).map(|i| board.get(x0 + i, i)), k) {
                return win_of(p);
            }
        }
    }
    for y0 in 1..n {
        let len = n - y0;
        if len >= k {
            if let Some(p) = scan_run((0..len).map(|i| board.get(i, y0 + i)), k) {
                return win_of(p);
            }
        }
    }

    // Down-left diagonals, starting on the top edge then the right edge.
    for x0 in 0..n {
        let len = x0 + 1;
        if len >= k {
            if let Some(p) = scan_run((0..len).map(|i| board.get(x0 - i, i)), k) {
                return win_of(p);
            }
        }
    }
    for y0 in 1..n {
        let len = n - y0;
        if len >= k {
            if let Some(p) = scan_run((0..len).map(|i| board.get(n - 1 - i, y0 + i)), k) {
                return win_of(p);
            }
        }
    }

    if board.remaining_empty_count() == 0 {
        TerminalState::Draw
    } else {
        TerminalState::NotTerminal
    }
}

#[inline]
fn win_of(player: Player) -> TerminalState {
    match player {
        Player::X => TerminalState::XWins,
        Player::O => TerminalState::OWins,
    }
}

/// Walk one line of cells looking for `k` consecutive marks of one player.
/// Empty and blocked cells both reset the run.
fn scan_run(cells: impl Iterator<Item = Cell>, k: u8) -> Option<Player> {
    let mut run_player: Option<Player> = None;
    let mut run_len: u8 = 0;

    for cell in cells {
        match cell {
            Cell::Taken(p) => {
                if run_player == Some(p) {
                    run_len += 1;
                } else {
                    run_player = Some(p);
                    run_len = 1;
                }
                if run_len >= k {
                    return Some(p);
                }
            }
            Cell::Empty | Cell::Blocked => {
                run_player = None;
                run_len = 0;
            }
        }
    }
    None
}

#[cfg(test)]
#[path = "win_tests.rs"]
mod win_tests;
