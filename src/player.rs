//! Players that plug into the turn loop
//!
//! A [`Player`] is polled once per tick for a move. The human variant hands
//! back a cell supplied from outside (a click), exactly once; the computer
//! variant runs the [`AIEngine`] synchronously.

use log::warn;

use crate::board::{Board, Cell, Mark};
use crate::config::NodeBudget;
use crate::engine::{AIEngine, MoveResult};

/// Player driven by external input
#[derive(Debug, Clone)]
pub struct HumanPlayer {
    mark: Mark,
    name: String,
    pending: Option<Cell>,
}

impl HumanPlayer {
    pub fn new(mark: Mark, name: impl Into<String>) -> Self {
        Self {
            mark,
            name: name.into(),
            pending: None,
        }
    }

    /// Buffer a cell chosen by the user. A later input replaces an unread one.
    pub fn notify_input(&mut self, cell: Cell) {
        self.pending = Some(cell);
    }

    /// Hand out the buffered cell once. `None` until input arrives.
    ///
    /// Input for an occupied cell is dropped.
    pub fn get_move(&mut self, board: &Board) -> Option<Cell> {
        let cell = self.pending.take()?;
        if !board.is_empty(cell) {
            warn!("{}: ignoring input on occupied cell {}", self.name, cell);
            return None;
        }
        Some(cell)
    }

    pub fn has_pending_input(&self) -> bool {
        self.pending.is_some()
    }
}

/// Player driven by the alpha-beta engine
#[derive(Debug, Clone)]
pub struct ComputerPlayer {
    mark: Mark,
    name: String,
    engine: AIEngine,
    last_result: Option<MoveResult>,
}

impl ComputerPlayer {
    pub fn new(mark: Mark, name: impl Into<String>, budget: NodeBudget) -> Self {
        Self {
            mark,
            name: name.into(),
            engine: AIEngine::with_budget(budget),
            last_result: None,
        }
    }

    /// Search the board and return the chosen move.
    pub fn get_move(&mut self, board: &mut Board) -> Option<Cell> {
        let result = self.engine.get_move_with_stats(board, self.mark);
        let cell = result.best_move;
        self.last_result = Some(result);
        cell
    }

    pub fn engine(&self) -> &AIEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut AIEngine {
        &mut self.engine
    }

    pub fn last_result(&self) -> Option<&MoveResult> {
        self.last_result.as_ref()
    }
}

/// A participant in the turn loop
#[derive(Debug, Clone)]
pub enum Player {
    Human(HumanPlayer),
    Computer(ComputerPlayer),
}

impl Player {
    pub fn human(mark: Mark, name: impl Into<String>) -> Self {
        Player::Human(HumanPlayer::new(mark, name))
    }

    pub fn computer(mark: Mark, name: impl Into<String>, budget: NodeBudget) -> Self {
        Player::Computer(ComputerPlayer::new(mark, name, budget))
    }

    /// Poll for a move. `None` means no move yet (human) or no legal move.
    pub fn get_move(&mut self, board: &mut Board) -> Option<Cell> {
        match self {
            Player::Human(human) => human.get_move(board),
            Player::Computer(computer) => computer.get_move(board),
        }
    }

    /// Forward a user-chosen cell. Computer players ignore input.
    pub fn notify_input(&mut self, cell: Cell) {
        match self {
            Player::Human(human) => human.notify_input(cell),
            Player::Computer(_) => {}
        }
    }

    pub fn mark(&self) -> Mark {
        match self {
            Player::Human(human) => human.mark,
            Player::Computer(computer) => computer.mark,
        }
    }

    /// Mark of the other side
    pub fn opposite_mark(&self) -> Mark {
        self.mark().opponent()
    }

    pub fn name(&self) -> &str {
        match self {
            Player::Human(human) => &human.name,
            Player::Computer(computer) => &computer.name,
        }
    }

    pub fn is_human(&self) -> bool {
        matches!(self, Player::Human(_))
    }

    /// Diagnostics of the most recent computer move
    pub fn last_result(&self) -> Option<&MoveResult> {
        match self {
            Player::Human(_) => None,
            Player::Computer(computer) => computer.last_result(),
        }
    }
}
