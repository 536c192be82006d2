//! Shape templates: fixed polyomino definitions.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Cell offsets of a shape, relative to its top-left anchor.
///
/// SmallVec keeps the common case (up to the 3x3 square, 9 cells) inline.
pub type CellOffsets = SmallVec<[(i8, i8); 9]>;

/// Identifier of a shape template in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TemplateId(pub u16);

impl TemplateId {
    /// Create a template id from a raw value.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw id value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Template({})", self.0)
    }
}

/// A polyomino template, described only by its cell offsets.
///
/// Offsets are (row, col) relative to the anchor and canonical: the minimum
/// row offset and the minimum column offset are both 0, so the anchor is the
/// shape's top-left bounding corner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeTemplate {
    /// Template id, stable across catalog rebuilds.
    pub id: TemplateId,
    /// Human-readable name for logs and display layers.
    pub name: String,
    cells: CellOffsets,
}

impl ShapeTemplate {
    /// Create a template.
    ///
    /// Panics on a zero-cell shape or non-canonical offsets; both are
    /// construction-time contract violations.
    #[must_use]
    pub fn new(id: TemplateId, name: impl Into<String>, cells: &[(i8, i8)]) -> Self {
        assert!(!cells.is_empty(), "shape template has no cells");
        let min_row = cells.iter().map(|&(r, _)| r).min().unwrap_or(0);
        let min_col = cells.iter().map(|&(_, c)| c).min().unwrap_or(0);
        assert!(
            min_row == 0 && min_col == 0,
            "shape template offsets must be anchored at (0,0)"
        );

        Self {
            id,
            name: name.into(),
            cells: SmallVec::from_slice(cells),
        }
    }

    /// The cell offsets.
    #[must_use]
    pub fn cells(&self) -> &[(i8, i8)] {
        &self.cells
    }

    /// Number of cells in the shape.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}
