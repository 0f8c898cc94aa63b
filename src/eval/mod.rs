//! Evaluation module for 4x4 tic-tac-toe positions
//!
//! - Terminal scoring (win / draw / loss)
//! - Line-counting heuristic used when the search runs out of node budget

pub mod heuristic;
pub mod patterns;

pub use heuristic::{count_lines, heuristic_score, terminal_score, LineCounts};
pub use patterns::{classify_line, LinePattern, LineScore};
