//! Line patterns and their weights for the cutoff heuristic

use crate::board::Mark;

/// Scores for terminal positions and line patterns
pub struct LineScore;

impl LineScore {
    // Terminal outcomes
    /// Maximizing side has four in a line
    pub const WIN: i32 = 1;
    pub const DRAW: i32 = 0;
    /// Opponent has four in a line
    pub const LOSS: i32 = -1;

    // Heuristic weights, only used once the node budget is spent
    /// Three marks in a line
    pub const THREE: i32 = 6;
    /// Two marks in a line
    pub const TWO: i32 = 3;
    /// One mark in a line
    pub const ONE: i32 = 1;
}

/// How many of a side's marks a line holds, as seen by the line-sum test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinePattern {
    None,
    One,
    Two,
    Three,
}

impl LinePattern {
    #[inline]
    pub fn weight(self) -> i32 {
        match self {
            LinePattern::None => 0,
            LinePattern::One => LineScore::ONE,
            LinePattern::Two => LineScore::TWO,
            LinePattern::Three => LineScore::THREE,
        }
    }
}

/// Classify a line sum for `side`.
///
/// Tries `3·own`, `2·own`, `own` against the sum, then peels off one opponent
/// code and tries again, three attempts in total. A line with up to two
/// opponent marks still counts for `side`; four of `side`'s own marks never
/// match.
#[inline]
pub fn classify_line(sum: i32, side: Mark) -> LinePattern {
    let own = side.code();
    let opp = side.opponent().code();
    let mut val = sum;
    for _ in 0..3 {
        if val == own * 3 {
            return LinePattern::Three;
        }
        if val == own * 2 {
            return LinePattern::Two;
        }
        if val == own {
            return LinePattern::One;
        }
        val -= opp;
    }
    LinePattern::None
}
