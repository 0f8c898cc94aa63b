//! Node-budgeted alpha-beta search
//!
//! Plain minimax with alpha-beta pruning over a single mutable [`Board`].
//! Moves are played and taken back in place, so no board is allocated per
//! node.
//!
//! # Features
//!
//! - Separate max/min procedures, maximizing side fixed for the whole search
//! - Node budget instead of a depth limit: once `budget` max-nodes have been
//!   entered, every further max-ply child is scored by the line heuristic
//! - Early exit from a node as soon as a child reaches the exact win (max) or
//!   loss (min) score
//!
//! # Example
//!
//! ```
//! use tictactoe4::board::{Board, Cell, Mark};
//! use tictactoe4::search::Searcher;
//!
//! let mut board = Board::new();
//! board.make_move(Cell::new(0, 0), Mark::X).unwrap();
//!
//! let mut searcher = Searcher::new(49);
//! let result = searcher.search(&mut board, Mark::O);
//! assert_eq!(result.best_move, Some(Cell::new(0, 3)));
//! assert_eq!(board.move_count(), 1);
//! ```

use log::debug;

use crate::board::{Board, Cell, Mark};
use crate::eval::{heuristic_score, terminal_score, LineScore};

/// Bound for the root alpha-beta window. Larger than any reachable score.
const INF: i32 = 1000;

/// Search counters, reset for every top-level search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Node budget ran out and the heuristic was used
    pub cutoff: bool,
    /// Deepest ply reached
    pub depth: u32,
    /// Max nodes entered (the quantity the budget limits)
    pub nodes: u64,
    /// Max nodes left early on a winning child
    pub max_prunes: u64,
    /// Min nodes left early on a losing child
    pub min_prunes: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, `None` if the game is already over
    pub best_move: Option<Cell>,
    /// Value of the best move for the searching side
    pub score: i32,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Value of a subtree together with the move that produced it
#[derive(Debug, Clone, Copy)]
struct Outcome {
    value: i32,
    best_move: Option<Cell>,
    depth: u32,
}

/// Per-invocation search state. Owns the exclusive borrow of the board for
/// the duration of one search.
struct SearchContext<'a> {
    board: &'a mut Board,
    maximizing: Mark,
    budget: u64,
    stats: SearchStats,
}

impl<'a> SearchContext<'a> {
    fn new(board: &'a mut Board, maximizing: Mark, budget: u64) -> Self {
        Self {
            board,
            maximizing,
            budget,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    fn play(&mut self, cell: Cell, mark: Mark) {
        let played = self.board.make_move(cell, mark);
        debug_assert!(played.is_ok(), "search played occupied cell {cell}");
    }

    #[inline]
    fn take_back(&mut self) {
        let undone = self.board.undo_move();
        debug_assert!(undone.is_ok(), "search undo with empty history");
    }

    #[inline]
    fn budget_spent(&self) -> bool {
        self.stats.nodes >= self.budget
    }

    /// Maximizing ply: the searching side moves.
    fn max_value(&mut self, mut alpha: i32, beta: i32, height: u32) -> Outcome {
        self.stats.nodes += 1;
        let height = height + 1;
        let mut depth = height;
        let mut best_move = None;
        let mut best = -INF;

        for cell in self.board.free_cells() {
            self.play(cell, self.maximizing);

            // Budget is checked before the terminal test, so a spent budget
            // scores even a finished game heuristically.
            let value = if self.budget_spent() {
                self.stats.cutoff = true;
                heuristic_score(self.board, self.maximizing)
            } else if self.board.is_game_over() {
                terminal_score(self.board, self.maximizing)
            } else {
                let child = self.min_value(alpha, beta, height);
                depth = depth.max(child.depth);
                child.value
            };

            self.take_back();

            if value >= beta {
                return Outcome { value, best_move: Some(cell), depth };
            }
            if value > alpha {
                alpha = value;
            }
            if value > best {
                best = value;
                best_move = Some(cell);
            }
            if value == LineScore::WIN {
                self.stats.max_prunes += 1;
                break;
            }
        }

        Outcome { value: best, best_move, depth }
    }

    /// Minimizing ply: the opponent moves. Not counted against the budget.
    fn min_value(&mut self, alpha: i32, mut beta: i32, height: u32) -> Outcome {
        let height = height + 1;
        let mut depth = height;
        let mut best_move = None;
        let mut best = INF;
        let opponent = self.maximizing.opponent();

        for cell in self.board.free_cells() {
            self.play(cell, opponent);

            let value = if self.board.is_game_over() {
                terminal_score(self.board, self.maximizing)
            } else {
                let child = self.max_value(alpha, beta, height);
                depth = depth.max(child.depth);
                child.value
            };

            self.take_back();

            if value < alpha {
                return Outcome { value, best_move: Some(cell), depth };
            }
            if value < beta {
                beta = value;
            }
            if value < best {
                best = value;
                best_move = Some(cell);
            }
            if value == LineScore::LOSS {
                self.stats.min_prunes += 1;
                break;
            }
        }

        Outcome { value: best, best_move, depth }
    }
}

/// Alpha-beta searcher limited by a node budget.
#[derive(Debug, Clone)]
pub struct Searcher {
    budget: u64,
    searches: u64,
}

impl Searcher {
    /// Create a searcher that enters at most `budget` max nodes before
    /// falling back to the heuristic.
    #[must_use]
    pub fn new(budget: u64) -> Self {
        Self { budget, searches: 0 }
    }

    #[must_use]
    pub fn budget(&self) -> u64 {
        self.budget
    }

    pub fn set_budget(&mut self, budget: u64) {
        self.budget = budget;
    }

    /// Number of searches run so far
    #[must_use]
    pub fn searches(&self) -> u64 {
        self.searches
    }

    /// Find the best move for `mark`.
    ///
    /// The board is borrowed mutably for move/undo and is left exactly as it
    /// was given.
    pub fn search(&mut self, board: &mut Board, mark: Mark) -> SearchResult {
        self.searches += 1;

        if board.is_game_over() || board.free_cells().is_empty() {
            return SearchResult {
                best_move: None,
                score: 0,
                stats: SearchStats::default(),
            };
        }

        let mut ctx = SearchContext::new(board, mark, self.budget);
        let root = ctx.max_value(-INF, INF, 0);
        let stats = ctx.stats;

        debug!(
            "search {:?}: move {:?} score {} nodes {} depth {} cutoff {}",
            mark, root.best_move, root.value, stats.nodes, root.depth, stats.cutoff
        );

        SearchResult {
            best_move: root.best_move,
            score: root.value,
            stats: SearchStats { depth: root.depth, ..stats },
        }
    }
}
