//! 4x4 Tic-Tac-Toe with a node-budgeted alpha-beta AI
//!
//! Two players alternate placing X and O on a 4x4 grid; four in a row,
//! column or main diagonal wins, a full board without one is a draw.
//!
//! # Architecture
//!
//! - [`board`]: Grid state, move/undo, win and draw detection
//! - [`eval`]: Terminal scores and the line-counting heuristic
//! - [`search`]: Alpha-beta search bounded by a node budget
//! - [`engine`]: Static openings in front of the search
//! - [`player`]: Human and computer players behind one interface
//! - [`game`]: The turn loop as a pollable state machine
//! - [`config`]: Difficulty tiers and startup options
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use tictactoe4::{AIEngine, Board, Cell, Difficulty, Mark};
//!
//! let mut board = Board::new();
//! board.make_move(Cell::new(0, 0), Mark::X).unwrap();
//!
//! let mut engine = AIEngine::with_difficulty(Difficulty::Easy);
//! if let Some(cell) = engine.get_move(&mut board, Mark::O) {
//!     board.make_move(cell, Mark::O).unwrap();
//! }
//! assert_eq!(board.move_count(), 2);
//! ```
//!
//! # Difficulty
//!
//! Difficulty is the number of maximizing nodes a search may enter before
//! the remaining candidates are scored heuristically:
//! easy 49, medium 3177, hard 203374. Hard plays perfectly.

pub mod board;
pub mod config;
pub mod engine;
pub mod eval;
pub mod game;
pub mod player;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, CellSet, Line, Mark, MoveError, BOARD_SIZE, LINES, TOTAL_CELLS};
pub use config::{ConfigError, Difficulty, FirstMover, GameConfig, NodeBudget};
pub use engine::{AIEngine, MoveResult, SearchType};
pub use game::{Game, GameError, GameStatus};
pub use player::{ComputerPlayer, HumanPlayer, Player};
pub use search::{SearchResult, SearchStats, Searcher};
