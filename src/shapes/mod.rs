//! Shape catalog: polyomino templates, dealt instances, and the hand.
//!
//! Templates are fixed data (every orientation is its own template; there is
//! no rotation at play time). Instances add identity: a unique id and a
//! spawn-batch tag, plus the derived `disabled` display flag.

pub mod catalog;
pub mod hand;
pub mod instance;
pub mod template;

pub use catalog::ShapeCatalog;
pub use hand::{Hand, HAND_SIZE};
pub use instance::{Shape, SpawnBatch};
pub use template::{CellOffsets, ShapeTemplate, TemplateId};
