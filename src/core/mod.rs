//! Core engine types: shape ids and deterministic RNG.
//!
//! Everything the rest of the engine builds on and that carries no game
//! rules of its own. The id source and RNG are the only two stateful
//! collaborators the pure operations consume.

pub mod ids;
pub mod rng;

pub use ids::{ShapeId, ShapeIdSource};
pub use rng::{GameRng, GameRngState};
