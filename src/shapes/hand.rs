//! The hand: the up-to-three shapes currently on offer.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::ShapeId;

use super::instance::Shape;

/// Number of shapes in a freshly dealt hand.
pub const HAND_SIZE: usize = 3;

/// Ordered collection of 0-3 current shapes.
///
/// The hand is refilled to [`HAND_SIZE`] only once it empties; until then
/// remaining shapes are carried over, keeping their original spawn batch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    shapes: Vec<Shape>,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The shapes in hand order.
    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Number of shapes currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Check if the hand is empty (refill condition).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Look up a shape by id.
    #[must_use]
    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    /// Remove and return a shape by id; `None` if it is not in the hand.
    pub fn take(&mut self, id: ShapeId) -> Option<Shape> {
        let pos = self.shapes.iter().position(|s| s.id == id)?;
        Some(self.shapes.remove(pos))
    }

    /// Put a fresh deal into the hand.
    ///
    /// Panics if the hand still holds shapes or the deal exceeds
    /// [`HAND_SIZE`]; refills only happen on an empty hand.
    pub fn deal(&mut self, shapes: Vec<Shape>) {
        assert!(self.is_empty(), "dealt into a non-empty hand");
        assert!(shapes.len() <= HAND_SIZE, "deal exceeds hand size");
        self.shapes = shapes;
    }

    /// Recompute every shape's derived `disabled` flag against a board.
    pub fn refresh_disabled(&mut self, board: &Board) {
        for shape in &mut self.shapes {
            shape.refresh_disabled(board);
        }
    }
}
