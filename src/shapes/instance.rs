//! Shape instances - dealt pieces with identity.
//!
//! A `Shape` is one dealt piece: a unique id, a reference back to its
//! template, a copy of the template's cells, and a spawn-batch tag. The
//! `disabled` flag is derived, never authoritative: it is recomputed from
//! the current board whenever board or hand changes, and exists purely so
//! display layers can grey out unplayable pieces. A disabled shape stays in
//! the hand; searches skip it naturally because it contributes no
//! candidates.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Board;
use crate::core::ShapeId;

use super::template::{CellOffsets, ShapeTemplate, TemplateId};

/// Tag identifying one deal of the hand.
///
/// Freshly dealt pieces share a batch; carried-over pieces keep their old
/// one. Display layers use the distinction for deal animations. Batches are
/// a monotonic counter, not a timestamp, so sessions replay identically.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpawnBatch(pub u64);

impl SpawnBatch {
    /// Create a batch tag from a raw counter value.
    #[must_use]
    pub const fn new(batch: u64) -> Self {
        Self(batch)
    }

    /// Get the raw counter value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// One dealt shape instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    /// Unique instance id.
    pub id: ShapeId,
    /// The template this instance was drawn from.
    pub template: TemplateId,
    /// The deal this instance arrived in.
    pub spawn_batch: SpawnBatch,
    cells: CellOffsets,
    disabled: bool,
}

impl Shape {
    /// Instantiate a template.
    #[must_use]
    pub fn new(id: ShapeId, template: &ShapeTemplate, spawn_batch: SpawnBatch) -> Self {
        Self {
            id,
            template: template.id,
            spawn_batch,
            cells: SmallVec::from_slice(template.cells()),
            disabled: false,
        }
    }

    /// Cell offsets relative to the anchor.
    #[must_use]
    pub fn cells(&self) -> &[(i8, i8)] {
        &self.cells
    }

    /// Number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Derived display flag: no legal placement on the last refreshed board.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Recompute the derived `disabled` flag against a board.
    pub fn refresh_disabled(&mut self, board: &Board) {
        self.disabled = !board.can_fit_anywhere(&self.cells);
    }
}
