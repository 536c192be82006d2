//! The 9x9 occupancy grid.
//!
//! `Board` is a plain value type: `place` returns a new board and never
//! touches the input, so callers may keep as many snapshots as they like
//! (authoritative state, hover previews, solver simulations). At 81 booleans
//! a copy is cheaper than any persistent-structure indirection would be.

use serde::{Deserialize, Serialize};

/// Side length of the board.
pub const BOARD_SIZE: usize = 9;

/// Side length of one of the nine sub-boxes.
pub const BOX_SIZE: usize = 3;

/// The 9x9 boolean occupancy grid.
///
/// ## Example
///
/// ```
/// use nexel_core::board::Board;
///
/// let board = Board::empty();
/// let placed = board.place(&[(0, 0), (0, 1)], 4, 4);
///
/// assert!(board.is_empty());        // input untouched
/// assert_eq!(placed.filled_count(), 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[bool; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create an all-empty board.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the cell at (row, col) is occupied.
    ///
    /// Panics if the coordinates are out of range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[row][col]
    }

    /// True iff every offset cell of the shape, anchored at (row, col),
    /// lands in range and on an empty cell.
    #[must_use]
    pub fn can_place(&self, cells: &[(i8, i8)], row: usize, col: usize) -> bool {
        cells.iter().all(|&(dr, dc)| {
            let r = row as i32 + i32::from(dr);
            let c = col as i32 + i32::from(dc);
            (0..BOARD_SIZE as i32).contains(&r)
                && (0..BOARD_SIZE as i32).contains(&c)
                && !self.cells[r as usize][c as usize]
        })
    }

    /// Return a new board with the shape's cells set.
    ///
    /// Precondition: `can_place` holds. Violations panic; a board is never
    /// partially updated.
    #[must_use]
    pub fn place(&self, cells: &[(i8, i8)], row: usize, col: usize) -> Self {
        assert!(!cells.is_empty(), "shape has no cells");
        assert!(
            self.can_place(cells, row, col),
            "place() called where can_place is false (anchor {row},{col})"
        );

        let mut next = *self;
        for &(dr, dc) in cells {
            let r = (row as i32 + i32::from(dr)) as usize;
            let c = (col as i32 + i32::from(dc)) as usize;
            next.cells[r][c] = true;
        }
        next
    }

    /// All legal anchor positions for a shape, in row-major order
    /// (row 0..8 outer, col 0..8 inner).
    ///
    /// This fixed order is the solver's only tie-break source.
    #[must_use]
    pub fn valid_placements(&self, cells: &[(i8, i8)]) -> Vec<(usize, usize)> {
        let mut placements = Vec::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if self.can_place(cells, row, col) {
                    placements.push((row, col));
                }
            }
        }
        placements
    }

    /// Whether the shape has at least one legal anchor anywhere.
    #[must_use]
    pub fn can_fit_anywhere(&self, cells: &[(i8, i8)]) -> bool {
        (0..BOARD_SIZE).any(|row| (0..BOARD_SIZE).any(|col| self.can_place(cells, row, col)))
    }

    /// True iff all 81 cells are empty (the win condition).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|row| row.iter().all(|&c| !c))
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|&&c| c).count())
            .sum()
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: bool) {
        self.cells[row][col] = value;
    }
}

impl std::fmt::Display for Board {
    /// Renders the grid as nine rows of `.`/`#`, for debugging drivers.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            for &cell in row {
                f.write_str(if cell { "#" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
