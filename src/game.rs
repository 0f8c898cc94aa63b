//! Game session: the turn loop as a pollable state machine
//!
//! The front end calls [`Game::tick`] once per frame. A tick asks the player
//! to move for a cell, applies it and hands the turn over. Human moves arrive
//! through [`Game::submit_input`] and are picked up on the next tick.

use log::{debug, info};
use thiserror::Error;

use crate::board::{Board, Cell, Line, Mark, MoveError};
use crate::config::{FirstMover, GameConfig, NodeBudget};
use crate::engine::MoveResult;
use crate::player::Player;

/// Session misuse
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("the game is over")]
    GameOver,
    #[error("it is not a human player's turn")]
    NotHumanTurn,
    #[error(transparent)]
    Move(#[from] MoveError),
}

/// Current state of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress { to_move: Mark },
    Won { winner: Mark, line: Line },
    Draw,
}

/// Two players, one board and whose turn it is
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    players: [Player; 2],
    current: usize,
    last_ai_result: Option<MoveResult>,
    games_played: u32,
}

impl Game {
    /// `first` moves first.
    pub fn new(first: Player, second: Player) -> Self {
        debug_assert_ne!(first.mark(), second.mark());
        Self {
            board: Board::new(),
            players: [first, second],
            current: 0,
            last_ai_result: None,
            games_played: 0,
        }
    }

    /// Human plays O, the computer plays X.
    pub fn from_config(config: &GameConfig) -> Self {
        let human = Player::human(Mark::O, config.human_name.clone());
        let computer = Player::computer(Mark::X, config.computer_name.clone(), config.budget);
        match config.first_mover {
            FirstMover::Human => Self::new(human, computer),
            FirstMover::Computer => Self::new(computer, human),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Player whose turn it is
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn player_by_mark(&self, mark: Mark) -> Option<&Player> {
        self.players.iter().find(|p| p.mark() == mark)
    }

    pub fn is_human_turn(&self) -> bool {
        !self.board.is_game_over() && self.current_player().is_human()
    }

    pub fn is_over(&self) -> bool {
        self.board.is_game_over()
    }

    /// Diagnostics of the latest computer move
    pub fn last_ai_result(&self) -> Option<&MoveResult> {
        self.last_ai_result.as_ref()
    }

    /// Completed resets
    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Queue a cell for the human player to move.
    pub fn submit_input(&mut self, cell: Cell) -> Result<(), GameError> {
        if self.board.is_game_over() {
            return Err(GameError::GameOver);
        }
        if !self.current_player().is_human() {
            return Err(GameError::NotHumanTurn);
        }
        if !self.board.is_empty(cell) {
            return Err(MoveError::Occupied(cell).into());
        }
        self.players[self.current].notify_input(cell);
        Ok(())
    }

    /// Advance the loop by one poll.
    ///
    /// Returns the cell played, or `None` when the game is over or the player
    /// to move has nothing to offer yet.
    pub fn tick(&mut self) -> Result<Option<Cell>, GameError> {
        if self.board.is_game_over() {
            return Ok(None);
        }

        let player = &mut self.players[self.current];
        let Some(cell) = player.get_move(&mut self.board) else {
            return Ok(None);
        };
        let mark = player.mark();
        if let Some(result) = player.last_result() {
            self.last_ai_result = Some(result.clone());
        }

        self.board.make_move(cell, mark)?;
        debug!("{} plays {}", self.players[self.current].name(), cell);

        if self.board.is_game_over() {
            info!("{}", self.status_text());
        } else {
            self.current = 1 - self.current;
        }
        Ok(Some(cell))
    }

    /// Tick until the game ends or a human has to move.
    pub fn run_until_input(&mut self) -> Result<(), GameError> {
        while self.tick()?.is_some() {}
        Ok(())
    }

    /// Start a new game with the move order swapped.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.players.swap(0, 1);
        self.current = 0;
        self.last_ai_result = None;
        self.games_played += 1;
        debug!("new game, {} moves first", self.current_player().name());
    }

    /// Change the node budget of every computer player.
    pub fn set_budget(&mut self, budget: NodeBudget) {
        for player in &mut self.players {
            if let Player::Computer(computer) = player {
                computer.engine_mut().set_budget(budget);
            }
        }
    }

    pub fn status(&self) -> GameStatus {
        if let (Some(winner), Some(line)) = (self.board.winner(), self.board.winning_line()) {
            return GameStatus::Won { winner, line };
        }
        if self.board.is_draw() {
            return GameStatus::Draw;
        }
        GameStatus::InProgress {
            to_move: self.current_player().mark(),
        }
    }

    /// One-line status for display
    pub fn status_text(&self) -> String {
        match self.status() {
            GameStatus::InProgress { to_move } => format!("{}'s turn", self.name_of(to_move)),
            GameStatus::Won { winner, .. } => format!("{} wins.", self.name_of(winner)),
            GameStatus::Draw => "Draw.".to_string(),
        }
    }

    fn name_of(&self, mark: Mark) -> &str {
        self.player_by_mark(mark).map_or("?", Player::name)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}
