//! # nexel-core
//!
//! Engine for a 9x9 block-placement puzzle: deterministic board state,
//! shape dealing, scoring, and heuristic auto-play.
//!
//! ## Design Principles
//!
//! 1. **Pure Engine, Explicit State**: Board and solver operations are pure
//!    functions over value types. All mutable state lives in `GameSession`,
//!    owned by whatever drives play.
//!
//! 2. **Deterministic by Construction**: Seeded `GameRng` for deals, strict
//!    row-major tie-breaking in the solver. Same seed, same game.
//!
//! 3. **Fail Fast on Contract Violations**: Out-of-range or overlapping
//!    placements panic. `Option` is reserved for normal domain outcomes
//!    like "no legal move".
//!
//! ## Modules
//!
//! - `core`: Shape instance IDs and the forkable deterministic RNG
//! - `board`: 9x9 occupancy grid, completion detection, clearing
//! - `shapes`: Template catalog, dealt instances, the hand
//! - `scoring`: Clear event to points
//! - `solver`: Four one-ply heuristic strategies over a shared search
//! - `session`: The session state machine driving all of the above

pub mod board;
pub mod core;
pub mod scoring;
pub mod session;
pub mod shapes;
pub mod solver;

// Re-export commonly used types
pub use crate::core::{GameRng, GameRngState, ShapeId, ShapeIdSource};

pub use crate::board::{
    clear, find_completed_areas, has_any_valid_placement, Board, CompletedAreas, BOARD_SIZE,
    BOX_SIZE,
};

pub use crate::shapes::{
    CellOffsets, Hand, Shape, ShapeCatalog, ShapeTemplate, SpawnBatch, TemplateId, HAND_SIZE,
};

pub use crate::scoring::score;

pub use crate::solver::{openness, Move, Strategy};

pub use crate::session::{
    BestScoreStore, GameSession, MemoryBestScore, MoveRecord, PlacementOutcome, SessionStatus,
};
