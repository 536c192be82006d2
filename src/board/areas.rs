//! Completion detection and atomic clearing.
//!
//! A completed area is a fully occupied row, column, or 3x3 box. Detection
//! produces a [`CompletedAreas`] snapshot computed fresh from a board;
//! clearing empties every cell of every named area in one step and reports
//! the deduplicated number of cells that went from occupied to empty.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::grid::{Board, BOARD_SIZE, BOX_SIZE};

/// Snapshot of the fully occupied areas of a board.
///
/// Never stored as authoritative state; recompute from a board whenever
/// needed. Boxes are identified by (box_row, box_col) in `0..3`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedAreas {
    /// Fully occupied row indices.
    pub rows: SmallVec<[u8; 3]>,
    /// Fully occupied column indices.
    pub cols: SmallVec<[u8; 3]>,
    /// Fully occupied boxes as (box_row, box_col).
    pub boxes: SmallVec<[(u8, u8); 3]>,
}

impl CompletedAreas {
    /// Total number of completed areas; drives the score multiplier.
    #[must_use]
    pub fn area_count(&self) -> usize {
        self.rows.len() + self.cols.len() + self.boxes.len()
    }

    /// True iff nothing completed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.cols.is_empty() && self.boxes.is_empty()
    }
}

/// Find every fully occupied row, column, and box.
///
/// Each of the 9+9+9 areas is tested independently; a cell may belong to
/// several completed areas at once.
#[must_use]
pub fn find_completed_areas(board: &Board) -> CompletedAreas {
    let mut completed = CompletedAreas::default();

    for row in 0..BOARD_SIZE {
        if (0..BOARD_SIZE).all(|col| board.get(row, col)) {
            completed.rows.push(row as u8);
        }
    }

    for col in 0..BOARD_SIZE {
        if (0..BOARD_SIZE).all(|row| board.get(row, col)) {
            completed.cols.push(col as u8);
        }
    }

    for box_row in 0..BOARD_SIZE / BOX_SIZE {
        for box_col in 0..BOARD_SIZE / BOX_SIZE {
            let full = (0..BOX_SIZE).all(|r| {
                (0..BOX_SIZE).all(|c| board.get(box_row * BOX_SIZE + r, box_col * BOX_SIZE + c))
            });
            if full {
                completed.boxes.push((box_row as u8, box_col as u8));
            }
        }
    }

    completed
}

/// Clear every cell in every completed area, returning the new board and
/// the size of the deduplicated union of cleared cells.
///
/// A cell sitting at the intersection of a completed row and column counts
/// once. After the clear, no area named in `completed` is still complete.
#[must_use]
pub fn clear(board: &Board, completed: &CompletedAreas) -> (Board, usize) {
    let mut next = *board;
    let mut cleared: FxHashSet<(u8, u8)> = FxHashSet::default();

    for &row in &completed.rows {
        for col in 0..BOARD_SIZE as u8 {
            next.set(row as usize, col as usize, false);
            cleared.insert((row, col));
        }
    }

    for &col in &completed.cols {
        for row in 0..BOARD_SIZE as u8 {
            next.set(row as usize, col as usize, false);
            cleared.insert((row, col));
        }
    }

    for &(box_row, box_col) in &completed.boxes {
        for r in 0..BOX_SIZE as u8 {
            for c in 0..BOX_SIZE as u8 {
                let row = box_row * BOX_SIZE as u8 + r;
                let col = box_col * BOX_SIZE as u8 + c;
                next.set(row as usize, col as usize, false);
                cleared.insert((row, col));
            }
        }
    }

    (next, cleared.len())
}
