//! Move search engine: four heuristic strategies over one shared search.
//!
//! A strategy is a pure function `(board, hand) -> Option<Move>`. All four
//! share the same enumerate/simulate/score skeleton ([`search::search_best`])
//! and differ only in the scalar they derive from each simulated placement.
//! No lookahead: every candidate is evaluated one ply deep.

pub mod search;
pub mod strategy;

pub use search::{openness, Move};
pub use strategy::Strategy;
