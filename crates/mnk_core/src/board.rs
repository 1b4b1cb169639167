use std::fmt;

use crate::error::{IllegalMove, InvalidConfig};
use crate::types::{Cell, Move, Player};

/// An n×n game board with optional permanently blocked cells.
///
/// The board is exclusively owned by the orchestrating caller. Search code
/// receives it for the duration of one call and probes it with paired
/// [`Board::place`] / [`Board::unplace`] calls, so the caller always observes
/// the board in the state it had before the call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Cell>,
    size: u8,
    win_size: u8,
    side_to_move: Player,
}

impl Board {
    /// Build an n×n board of empty cells, then block every coordinate in
    /// `blocked`. Blocking the same coordinate twice is tolerated; a
    /// coordinate outside the board is an error.
    pub fn new(size: u8, win_size: u8, blocked: &[Move]) -> Result<Self, InvalidConfig> {
        if size == 0 {
            return Err(InvalidConfig::BoardSize { size });
        }
        if win_size == 0 || win_size > size {
            return Err(InvalidConfig::WinSize { win_size, size });
        }

        let mut cells = vec![Cell::Empty; size as usize * size as usize];
        for &mv in blocked {
            if mv.x >= size || mv.y >= size {
                return Err(InvalidConfig::BlockedCell {
                    x: mv.x,
                    y: mv.y,
                    size,
                });
            }
            cells[index_of(size, mv.x, mv.y)] = Cell::Blocked;
        }

        Ok(Self {
            cells,
            size,
            win_size,
            side_to_move: Player::X,
        })
    }

    /// Parse a board from row diagrams, top row first: `.` empty, `X`/`O`
    /// marks, `$` blocked. The diagram must be square.
    pub fn from_rows(win_size: u8, rows: &[&str]) -> Result<Self, InvalidConfig> {
        let size = rows.len();
        if size == 0 || size > u8::MAX as usize {
            return Err(InvalidConfig::Diagram(format!(
                "expected between 1 and 255 rows, got {size}"
            )));
        }
        let size = size as u8;
        if win_size == 0 || win_size > size {
            return Err(InvalidConfig::WinSize { win_size, size });
        }

        let mut cells = Vec::with_capacity(size as usize * size as usize);
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != size as usize {
                return Err(InvalidConfig::Diagram(format!(
                    "row {y} has {} cells, expected {size}",
                    row.chars().count()
                )));
            }
            for c in row.chars() {
                match Cell::from_char(c) {
                    Some(cell) => cells.push(cell),
                    None => {
                        return Err(InvalidConfig::Diagram(format!(
                            "unknown cell character '{c}' in row {y}"
                        )))
                    }
                }
            }
        }

        Ok(Self {
            cells,
            size,
            win_size,
            side_to_move: Player::X,
        })
    }

    #[inline]
    pub fn size(&self) -> u8 {
        self.size
    }

    #[inline]
    pub fn win_size(&self) -> u8 {
        self.win_size
    }

    #[inline]
    pub fn side_to_move(&self) -> Player {
        self.side_to_move
    }

    pub fn set_side_to_move(&mut self, player: Player) {
        self.side_to_move = player;
    }

    #[inline]
    pub fn in_range(&self, x: u8, y: u8) -> bool {
        x < self.size && y < self.size
    }

    /// Cell contents at (x, y). Coordinates must be in range.
    #[inline]
    pub fn get(&self, x: u8, y: u8) -> Cell {
        debug_assert!(self.in_range(x, y));
        self.cells[index_of(self.size, x, y)]
    }

    /// True iff the coordinates are in range and the cell is empty.
    #[inline]
    pub fn is_valid_move(&self, x: u8, y: u8) -> bool {
        self.in_range(x, y) && self.get(x, y).is_empty()
    }

    /// Mark an empty cell during search. Must be paired with an
    /// [`Board::unplace`] before the enclosing call returns.
    #[inline]
    pub fn place(&mut self, mv: Move, player: Player) {
        debug_assert!(self.is_valid_move(mv.x, mv.y));
        self.cells[index_of(self.size, mv.x, mv.y)] = Cell::Taken(player);
    }

    /// Restore a cell probed by [`Board::place`]. Calling this on an empty or
    /// blocked cell is a programming error, not a runtime condition.
    #[inline]
    pub fn unplace(&mut self, mv: Move) {
        debug_assert!(matches!(self.get(mv.x, mv.y), Cell::Taken(_)));
        self.cells[index_of(self.size, mv.x, mv.y)] = Cell::Empty;
    }

    /// Apply a committed move at the game boundary: validates the target,
    /// marks it, and hands the turn to the opponent.
    pub fn apply_move(&mut self, mv: Move, player: Player) -> Result<(), IllegalMove> {
        if !self.in_range(mv.x, mv.y) {
            return Err(IllegalMove::OutOfRange { x: mv.x, y: mv.y });
        }
        match self.get(mv.x, mv.y) {
            Cell::Empty => {}
            Cell::Blocked => return Err(IllegalMove::Blocked { x: mv.x, y: mv.y }),
            Cell::Taken(_) => return Err(IllegalMove::Occupied { x: mv.x, y: mv.y }),
        }
        self.cells[index_of(self.size, mv.x, mv.y)] = Cell::Taken(player);
        self.side_to_move = player.other();
        Ok(())
    }

    /// Number of empty cells left. Bounds how deep any search can go.
    pub fn remaining_empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    /// Collect every empty cell in row-major order (row 0 left to right,
    /// then row 1, ...). Search relies on this order for deterministic
    /// tie-breaking.
    pub fn empty_cells_into(&self, moves: &mut Vec<Move>) {
        moves.clear();
        for y in 0..self.size {
            for x in 0..self.size {
                if self.get(x, y).is_empty() {
                    moves.push(Move::new(x, y));
                }
            }
        }
    }

    pub fn empty_cells(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(self.remaining_empty_count());
        self.empty_cells_into(&mut moves);
        moves
    }

    /// Start a fresh game on the same board: clears all marks, keeps the
    /// blocked cells, X to move.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            if matches!(cell, Cell::Taken(_)) {
                *cell = Cell::Empty;
            }
        }
        self.side_to_move = Player::X;
    }
}

#[inline]
fn index_of(size: u8, x: u8, y: u8) -> usize {
    y as usize * size as usize + x as usize
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size {
            for x in 0..self.size {
                write!(f, "{}", self.get(x, y).to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
