//! Move selection: static openings first, alpha-beta search otherwise
//!
//! 1. **Opening**: the first two plies of a game are answered from a fixed
//!    table without searching
//! 2. **Alpha-Beta**: node-budgeted search over the current board
//!
//! # Example
//!
//! ```
//! use tictactoe4::{AIEngine, Board, Cell, Difficulty, Mark, SearchType};
//!
//! let mut engine = AIEngine::with_difficulty(Difficulty::Easy);
//! let mut board = Board::new();
//!
//! let result = engine.get_move_with_stats(&mut board, Mark::X);
//! assert_eq!(result.best_move, Some(Cell::new(0, 0)));
//! assert_eq!(result.search_type, SearchType::Opening);
//! ```

use std::time::Instant;

use log::{debug, info};

use crate::board::{Board, Cell, Mark, TOTAL_CELLS};
use crate::config::{Difficulty, NodeBudget};
use crate::search::{SearchResult, SearchStats, Searcher};

/// Type of search that produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Fixed reply for the first two plies
    Opening,
    /// Regular alpha-beta search result
    AlphaBeta,
}

/// Result of a move decision with diagnostics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Chosen move, `None` when the game is already over
    pub best_move: Option<Cell>,
    /// Search value of the move (0 for openings)
    pub score: i32,
    /// Which path produced the move
    pub search_type: SearchType,
    /// Engine turn number, starting at 1
    pub turn: u32,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Search counters (all zero for openings)
    pub stats: SearchStats,
}

impl MoveResult {
    #[inline]
    fn opening(cell: Cell, turn: u32, time_ms: u64) -> Self {
        Self {
            best_move: Some(cell),
            score: 0,
            search_type: SearchType::Opening,
            turn,
            time_ms,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    fn from_alphabeta(result: SearchResult, turn: u32, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type: SearchType::AlphaBeta,
            turn,
            time_ms,
            stats: result.stats,
        }
    }
}

/// AI engine for one computer player.
///
/// Holds the searcher and a turn counter used in diagnostics. One engine
/// searches one board at a time; `&mut Board` enforces that.
#[derive(Debug, Clone)]
pub struct AIEngine {
    searcher: Searcher,
    turn: u32,
}

impl AIEngine {
    /// Create an engine at hard difficulty.
    #[must_use]
    pub fn new() -> Self {
        Self::with_difficulty(Difficulty::Hard)
    }

    #[must_use]
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self::with_budget(difficulty.budget())
    }

    #[must_use]
    pub fn with_budget(budget: NodeBudget) -> Self {
        Self {
            searcher: Searcher::new(budget.get()),
            turn: 0,
        }
    }

    /// Get the best move for `mark`, without statistics.
    #[must_use]
    pub fn get_move(&mut self, board: &mut Board, mark: Mark) -> Option<Cell> {
        self.get_move_with_stats(board, mark).best_move
    }

    /// Get the best move for `mark` along with search diagnostics.
    ///
    /// The board is used as scratch space during the search and is returned
    /// unchanged.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &mut Board, mark: Mark) -> MoveResult {
        let start = Instant::now();

        if let Some(cell) = self.get_opening_move(board) {
            self.turn += 1;
            debug!("static opening move {} for {:?}", cell, mark);
            return MoveResult::opening(cell, self.turn, start.elapsed().as_millis() as u64);
        }

        if board.is_game_over() {
            return MoveResult {
                best_move: None,
                score: 0,
                search_type: SearchType::AlphaBeta,
                turn: self.turn,
                time_ms: 0,
                stats: SearchStats::default(),
            };
        }

        self.turn += 1;
        let result = self.searcher.search(board, mark);
        let stats = result.stats;

        info!("turn {} ({:?})", self.turn, mark);
        if stats.cutoff {
            info!("cutoff reached");
        }
        info!("maximum depth: {}", stats.depth);
        info!("nodes generated: {}", stats.nodes);
        info!("max prunings: {}", stats.max_prunes);
        info!("min prunings: {}", stats.min_prunes);

        MoveResult::from_alphabeta(result, self.turn, start.elapsed().as_millis() as u64)
    }

    /// Fixed replies for the first two plies.
    ///
    /// Empty board → (0, 0). Two marks down → (0, 1), or (0, 2) when (0, 1)
    /// is taken. Hardcoded rather than searched; the second-ply search would
    /// otherwise be the most expensive of the game.
    fn get_opening_move(&self, board: &Board) -> Option<Cell> {
        let free = board.free_cells().len();
        if free == TOTAL_CELLS {
            return Some(Cell::new(0, 0));
        }
        if free == TOTAL_CELLS - 2 {
            let preferred = Cell::new(0, 1);
            return Some(if board.is_empty(preferred) {
                preferred
            } else {
                Cell::new(0, 2)
            });
        }
        None
    }

    #[must_use]
    pub fn budget(&self) -> u64 {
        self.searcher.budget()
    }

    pub fn set_budget(&mut self, budget: NodeBudget) {
        self.searcher.set_budget(budget.get());
    }

    /// Number of full searches run (openings excluded)
    #[must_use]
    pub fn searches(&self) -> u64 {
        self.searcher.searches()
    }

    /// Moves decided so far
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}
