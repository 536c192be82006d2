//! Board state engine: the 9x9 occupancy grid and its pure operations.
//!
//! Every operation takes boards by reference and returns fresh values; the
//! authoritative board and any speculative preview board can be held side by
//! side without synchronization.

pub mod areas;
pub mod grid;

pub use areas::{clear, find_completed_areas, CompletedAreas};
pub use grid::{Board, BOARD_SIZE, BOX_SIZE};

use crate::shapes::Shape;

/// Check whether any shape in `shapes` has at least one legal position.
///
/// The terminal "no moves" condition is the negation of this. An empty
/// slice trivially has no valid placement.
#[must_use]
pub fn has_any_valid_placement(board: &Board, shapes: &[Shape]) -> bool {
    shapes.iter().any(|s| board.can_fit_anywhere(s.cells()))
}
