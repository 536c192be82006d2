//! The shared enumerate/simulate/score skeleton.
//!
//! For every shape in hand order and every legal anchor in row-major order,
//! simulate the full placement pipeline (place, detect completions, clear)
//! and hand the result to a value function. The running maximum uses a
//! strict comparison, so ties resolve to the first candidate in enumeration
//! order and identical inputs always produce identical moves.

use serde::{Deserialize, Serialize};

use crate::board::{clear, find_completed_areas, Board, CompletedAreas, BOARD_SIZE};
use crate::core::ShapeId;
use crate::scoring::score;
use crate::shapes::Shape;

/// A chosen placement: which shape, where, and the points it scores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// The shape instance to place.
    pub shape: ShapeId,
    /// Anchor row.
    pub row: usize,
    /// Anchor column.
    pub col: usize,
    /// Points the placement scores (0 when nothing clears).
    pub points: u32,
}

/// Everything a value function may inspect about one simulated placement.
pub(crate) struct Simulation {
    /// The board after placing and clearing.
    pub board_after: Board,
    /// Areas the placement completed.
    pub completed: CompletedAreas,
    /// Deduplicated count of cleared cells.
    pub cleared_count: usize,
    /// Points the clear scores.
    pub points: u32,
}

/// Run the placement pipeline for one candidate.
pub(crate) fn simulate(board: &Board, cells: &[(i8, i8)], row: usize, col: usize) -> Simulation {
    let placed = board.place(cells, row, col);
    let completed = find_completed_areas(&placed);
    let (board_after, cleared_count) = clear(&placed, &completed);
    let points = score(cleared_count, &completed);

    Simulation {
        board_after,
        completed,
        cleared_count,
        points,
    }
}

/// Evaluate every candidate placement and keep the strict maximum.
///
/// Returns `None` only when no shape in `shapes` has a legal placement.
pub(crate) fn search_best<F>(board: &Board, shapes: &[Shape], mut value: F) -> Option<Move>
where
    F: FnMut(&Simulation) -> f64,
{
    let mut best: Option<(Move, f64)> = None;

    for shape in shapes {
        for (row, col) in board.valid_placements(shape.cells()) {
            let sim = simulate(board, shape.cells(), row, col);
            let v = value(&sim);

            if best.as_ref().map_or(true, |&(_, best_v)| v > best_v) {
                best = Some((
                    Move {
                        shape: shape.id,
                        row,
                        col,
                        points: sim.points,
                    },
                    v,
                ));
            }
        }
    }

    best.map(|(mv, _)| mv)
}

/// Openness heuristic: post-move flexibility of the empty cells.
///
/// Sum, over every empty cell, of its orthogonally adjacent empty neighbors
/// (4-neighborhood, clamped at the edges). Higher means more room for
/// future pieces.
#[must_use]
pub fn openness(board: &Board) -> u32 {
    let mut total = 0u32;

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if board.get(row, col) {
                continue;
            }
            if row > 0 && !board.get(row - 1, col) {
                total += 1;
            }
            if row + 1 < BOARD_SIZE && !board.get(row + 1, col) {
                total += 1;
            }
            if col > 0 && !board.get(row, col - 1) {
                total += 1;
            }
            if col + 1 < BOARD_SIZE && !board.get(row, col + 1) {
                total += 1;
            }
        }
    }

    total
}
