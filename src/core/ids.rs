//! Shape instance identification.
//!
//! Every shape dealt into a hand gets a unique `ShapeId`. Ids come from a
//! `ShapeIdSource`, a plain monotonic counter owned by whatever drives the
//! engine (a `GameSession`, a test harness). Ids are never reused within a
//! source and carry no meaning beyond uniqueness.

use serde::{Deserialize, Serialize};

/// Unique identifier for a shape instance.
///
/// Distinct from [`TemplateId`](crate::shapes::TemplateId): two shapes drawn
/// from the same template still have different `ShapeId`s.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShapeId(pub u32);

impl ShapeId {
    /// Create a shape id from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw id value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Shape({})", self.0)
    }
}

/// Monotonic allocator for shape ids.
///
/// ```
/// use nexel_core::core::ShapeIdSource;
///
/// let mut ids = ShapeIdSource::new();
/// let a = ids.alloc();
/// let b = ids.alloc();
/// assert_ne!(a, b);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeIdSource {
    next: u32,
}

impl ShapeIdSource {
    /// Create a source starting at id 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next unique id.
    pub fn alloc(&mut self) -> ShapeId {
        let id = ShapeId(self.next);
        self.next += 1;
        id
    }
}
