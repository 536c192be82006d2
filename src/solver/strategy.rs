//! The four move-selection strategies.
//!
//! Each strategy plugs one value function into the shared search; they are
//! addressable by the stable keys `"greedy"`, `"survival"`, `"hybrid"`, and
//! `"win"`.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::shapes::Shape;

use super::search::{openness, search_best, Move};

/// A pure move-selection strategy.
///
/// All four return `None` only when no shape in the hand has a legal
/// placement anywhere - the terminal "no moves" signal, not an error.
///
/// ## Example
///
/// ```
/// use nexel_core::solver::Strategy;
///
/// let strategy = Strategy::from_key("hybrid").unwrap();
/// assert_eq!(strategy, Strategy::Hybrid);
/// assert_eq!(strategy.key(), "hybrid");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Maximize the immediate score of the placement.
    Greedy,
    /// Maximize board openness after the placement; ignores score.
    Survival,
    /// Weighted blend: 0.6 * score + 0.4 * openness.
    Hybrid,
    /// Chase the empty-board win, then score, then minimal residue.
    Win,
}

impl Strategy {
    /// All strategies, in display order.
    pub const ALL: [Strategy; 4] = [
        Strategy::Greedy,
        Strategy::Survival,
        Strategy::Hybrid,
        Strategy::Win,
    ];

    /// Stable key for external selection surfaces.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Strategy::Greedy => "greedy",
            Strategy::Survival => "survival",
            Strategy::Hybrid => "hybrid",
            Strategy::Win => "win",
        }
    }

    /// Look a strategy up by its stable key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }

    /// Short display name, as shown by strategy pickers.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Strategy::Greedy => "Score+",
            Strategy::Survival => "Life+",
            Strategy::Hybrid => "Hybrid",
            Strategy::Win => "Win",
        }
    }

    /// Choose a move for the given board and hand.
    #[must_use]
    pub fn choose(self, board: &Board, hand: &[Shape]) -> Option<Move> {
        match self {
            Strategy::Greedy => greedy(board, hand),
            Strategy::Survival => {
                search_best(board, hand, |sim| f64::from(openness(&sim.board_after)))
            }
            Strategy::Hybrid => search_best(board, hand, |sim| {
                0.6 * f64::from(sim.points) + 0.4 * f64::from(openness(&sim.board_after))
            }),
            Strategy::Win => win(board, hand),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

fn greedy(board: &Board, hand: &[Shape]) -> Option<Move> {
    if let Some(mv) = search_best(board, hand, |sim| f64::from(sim.points)) {
        return Some(mv);
    }

    // No scoring candidate found at all: fall back to the first legal
    // placement of the first placeable shape, at score 0.
    for shape in hand {
        if let Some(&(row, col)) = board.valid_placements(shape.cells()).first() {
            return Some(Move {
                shape: shape.id,
                row,
                col,
                points: 0,
            });
        }
    }

    None
}

fn win(board: &Board, hand: &[Shape]) -> Option<Move> {
    let best = search_best(board, hand, |sim| {
        let win_bonus = if sim.board_after.is_empty() {
            1_000_000.0
        } else {
            0.0
        };
        win_bonus + 5.0 * f64::from(sim.points) + 50.0 * sim.cleared_count as f64
            - sim.board_after.filled_count() as f64
    });

    best.or_else(|| greedy(board, hand))
}
