//! Board structure with move history and cached terminal status

use thiserror::Error;

use super::cellset::CellSet;
use super::{Cell, Line, Mark, LINES, TOTAL_CELLS};

/// Reasons a board mutation was refused. The board is unchanged on error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("cell {0} is already occupied")]
    Occupied(Cell),
    #[error("cannot place an empty mark")]
    EmptyMark,
    #[error("no move to undo")]
    EmptyHistory,
}

/// Game board with move history for in-place search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; TOTAL_CELLS],
    /// Occupied cells, kept in sync with `history`
    occupied: CellSet,
    /// Played cells in move order
    history: Vec<Cell>,
    game_over: bool,
    draw: bool,
    winner: Option<Mark>,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; TOTAL_CELLS],
            occupied: CellSet::new(),
            history: Vec::with_capacity(TOTAL_CELLS),
            game_over: false,
            draw: false,
            winner: None,
        }
    }

    /// Get mark at cell
    #[inline]
    pub fn get(&self, cell: Cell) -> Mark {
        self.cells[cell.to_index()]
    }

    #[inline]
    pub fn is_empty(&self, cell: Cell) -> bool {
        !self.occupied.contains(cell)
    }

    /// Unplayed cells, iterated in column-major order
    #[inline]
    pub fn free_cells(&self) -> CellSet {
        self.occupied.complement()
    }

    /// Number of moves played
    #[inline]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Played cells with their marks, oldest first
    pub fn history(&self) -> impl Iterator<Item = (Cell, Mark)> + '_ {
        self.history.iter().map(|&cell| (cell, self.get(cell)))
    }

    #[inline]
    pub fn last_move(&self) -> Option<Cell> {
        self.history.last().copied()
    }

    /// Place `mark` at `cell` and refresh the terminal flags
    pub fn make_move(&mut self, cell: Cell, mark: Mark) -> Result<(), MoveError> {
        if mark.is_empty() {
            return Err(MoveError::EmptyMark);
        }
        if !self.is_empty(cell) {
            return Err(MoveError::Occupied(cell));
        }
        self.cells[cell.to_index()] = mark;
        self.occupied.insert(cell);
        self.history.push(cell);
        self.update_status();
        Ok(())
    }

    /// Take back the most recent move, returning its cell
    pub fn undo_move(&mut self) -> Result<Cell, MoveError> {
        let cell = self.history.pop().ok_or(MoveError::EmptyHistory)?;
        self.cells[cell.to_index()] = Mark::Empty;
        self.occupied.remove(cell);
        self.update_status();
        Ok(cell)
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[inline]
    pub fn is_draw(&self) -> bool {
        self.draw
    }

    /// Winning mark, if the game ended with four in a line
    #[inline]
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    /// The first completed line in `LINES` order
    pub fn winning_line(&self) -> Option<Line> {
        LINES.iter().copied().find(|line| self.line_owner(line).is_some())
    }

    /// Mark filling every cell of `line`, if any
    #[inline]
    fn line_owner(&self, line: &Line) -> Option<Mark> {
        let first = self.get(line[0]);
        if first.is_empty() {
            return None;
        }
        line[1..]
            .iter()
            .all(|&cell| self.get(cell) == first)
            .then_some(first)
    }

    /// Sum of mark codes along a line
    #[inline]
    pub fn line_sum(&self, line: &Line) -> i32 {
        line.iter().map(|&cell| self.get(cell).code()).sum()
    }

    fn update_status(&mut self) {
        if let Some(mark) = LINES.iter().find_map(|line| self.line_owner(line)) {
            self.game_over = true;
            self.winner = Some(mark);
            self.draw = false;
        } else if self.history.len() == TOTAL_CELLS {
            self.game_over = true;
            self.winner = None;
            self.draw = true;
        } else {
            self.game_over = false;
            self.winner = None;
            self.draw = false;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..super::BOARD_SIZE as u8 {
            for col in 0..super::BOARD_SIZE as u8 {
                write!(f, "{}", self.get(Cell::new(col, row)).symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
