//! Search module for the 4x4 tic-tac-toe AI
//!
//! Contains the node-budgeted alpha-beta searcher.

pub mod alphabeta;

pub use alphabeta::{SearchResult, SearchStats, Searcher};
