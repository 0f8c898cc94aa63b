//! Position scoring for the alpha-beta search
//!
//! Two scorers:
//! - [`terminal_score`] for finished games (+1 / 0 / -1)
//! - [`heuristic_score`] for positions reached after the node budget is spent

use crate::board::{Board, Mark, LINES};

use super::patterns::{classify_line, LinePattern, LineScore};

/// Score a finished game from the perspective of `maximizing`.
///
/// Only meaningful when `board.is_game_over()`.
#[must_use]
pub fn terminal_score(board: &Board, maximizing: Mark) -> i32 {
    if board.is_draw() {
        LineScore::DRAW
    } else if board.winner() == Some(maximizing) {
        LineScore::WIN
    } else {
        LineScore::LOSS
    }
}

/// Per-side line counts behind a heuristic score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineCounts {
    pub ones: i32,
    pub twos: i32,
    pub threes: i32,
}

impl LineCounts {
    fn add(&mut self, pattern: LinePattern) {
        match pattern {
            LinePattern::One => self.ones += 1,
            LinePattern::Two => self.twos += 1,
            LinePattern::Three => self.threes += 1,
            LinePattern::None => {}
        }
    }

    #[inline]
    pub fn weighted(&self) -> i32 {
        LineScore::THREE * self.threes + LineScore::TWO * self.twos + LineScore::ONE * self.ones
    }
}

/// Count patterns on every line for `side` and for its opponent.
pub fn count_lines(board: &Board, side: Mark) -> (LineCounts, LineCounts) {
    let mut own = LineCounts::default();
    let mut opp = LineCounts::default();
    for line in &LINES {
        let sum = board.line_sum(line);
        own.add(classify_line(sum, side));
        opp.add(classify_line(sum, side.opponent()));
    }
    (own, opp)
}

/// Estimate the position for `maximizing` when the search cannot go deeper.
///
/// 6 per three-line, 3 per two-line, 1 per one-line, minus the same for the
/// opponent.
#[must_use]
pub fn heuristic_score(board: &Board, maximizing: Mark) -> i32 {
    let (own, opp) = count_lines(board, maximizing);
    own.weighted() - opp.weighted()
}
