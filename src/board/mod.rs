//! Board representation for 4x4 tic-tac-toe

pub mod board;
pub mod cellset;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::{Board, MoveError};
pub use cellset::CellSet;

/// Board size (4x4)
pub const BOARD_SIZE: usize = 4;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 16

/// Cell contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    O,
    X,
}

impl Mark {
    /// Get the other player's mark
    #[inline]
    pub fn opponent(self) -> Mark {
        match self {
            Mark::O => Mark::X,
            Mark::X => Mark::O,
            Mark::Empty => Mark::Empty,
        }
    }

    /// Numeric code used by the line-sum heuristic.
    ///
    /// 3 and 4 keep `k * own + j * opp` unambiguous for every line the
    /// heuristic inspects; 1 and 2 would alias (1 + 1 == 2).
    #[inline]
    pub const fn code(self) -> i32 {
        match self {
            Mark::Empty => 0,
            Mark::O => 3,
            Mark::X => 4,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }

    pub fn symbol(self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::O => 'O',
            Mark::X => 'X',
        }
    }
}

/// Cell on the board, addressed as (column, row)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub col: u8,
    pub row: u8,
}

impl Cell {
    #[inline]
    pub const fn new(col: u8, row: u8) -> Self {
        debug_assert!((col as usize) < BOARD_SIZE && (row as usize) < BOARD_SIZE);
        Self { col, row }
    }

    /// Column-major index. Also the move enumeration order.
    #[inline]
    pub fn to_index(self) -> usize {
        self.col as usize * BOARD_SIZE + self.row as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            col: (idx / BOARD_SIZE) as u8,
            row: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(col: i32, row: i32) -> bool {
        col >= 0 && col < BOARD_SIZE as i32 && row >= 0 && row < BOARD_SIZE as i32
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}

/// Four cells that win the game when they all hold the same mark
pub type Line = [Cell; 4];

const fn line(cells: [(u8, u8); 4]) -> Line {
    [
        Cell::new(cells[0].0, cells[0].1),
        Cell::new(cells[1].0, cells[1].1),
        Cell::new(cells[2].0, cells[2].1),
        Cell::new(cells[3].0, cells[3].1),
    ]
}

/// All winning lines: rows, then columns, then the two main diagonals.
/// Shorter diagonals never win.
pub const LINES: [Line; 10] = [
    line([(0, 0), (1, 0), (2, 0), (3, 0)]),
    line([(0, 1), (1, 1), (2, 1), (3, 1)]),
    line([(0, 2), (1, 2), (2, 2), (3, 2)]),
    line([(0, 3), (1, 3), (2, 3), (3, 3)]),
    line([(0, 0), (0, 1), (0, 2), (0, 3)]),
    line([(1, 0), (1, 1), (1, 2), (1, 3)]),
    line([(2, 0), (2, 1), (2, 2), (2, 3)]),
    line([(3, 0), (3, 1), (3, 2), (3, 3)]),
    line([(0, 0), (1, 1), (2, 2), (3, 3)]),
    line([(0, 3), (1, 2), (2, 1), (3, 0)]),
];
