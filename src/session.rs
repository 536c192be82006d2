//! Game sessions: the explicit state object driving the pure engine.
//!
//! A `GameSession` owns the authoritative board, the hand, the score, the
//! RNG, and the id source, and runs the full placement pipeline (place,
//! detect completions, clear, score, refill). The engine modules stay pure;
//! all state lives here, owned by whatever process drives play (a CLI loop,
//! a fixed-interval auto-play timer, a test harness).
//!
//! ## State machine
//!
//! `Playing` transitions to `Won` when a clear leaves the board empty, and
//! to `NoMoves` when no shape in the hand has a legal placement. Both
//! terminals are absorbing; only an explicit [`GameSession::reset`] returns
//! to `Playing`.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::board::{
    clear, find_completed_areas, has_any_valid_placement, Board, CompletedAreas,
};
use crate::core::{GameRng, ShapeId, ShapeIdSource};
use crate::scoring::score;
use crate::shapes::{Hand, ShapeCatalog, SpawnBatch, TemplateId, HAND_SIZE};
use crate::solver::{Move, Strategy};

/// Session lifecycle state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionStatus {
    /// Moves are available.
    Playing,
    /// Terminal: no shape in the hand has a legal placement.
    NoMoves,
    /// Terminal: a clear left the board empty.
    Won,
}

impl SessionStatus {
    /// Whether this is one of the absorbing terminal states.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, SessionStatus::NoMoves | SessionStatus::Won)
    }
}

/// One applied move, as recorded in the session history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The placed shape instance.
    pub shape: ShapeId,
    /// Its template, for display layers replaying the move.
    pub template: TemplateId,
    /// Anchor row.
    pub row: usize,
    /// Anchor column.
    pub col: usize,
    /// Points the move scored.
    pub points: u32,
    /// Areas the move completed, if any.
    pub cleared: Option<CompletedAreas>,
    /// Deduplicated count of cleared cells.
    pub cleared_count: usize,
    /// Running score after the move.
    pub score_after: u32,
}

/// What a placement did, returned to the driver.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementOutcome {
    /// Points earned (0 when nothing cleared).
    pub points: u32,
    /// Deduplicated count of cleared cells.
    pub cleared_count: usize,
    /// Number of areas completed by the placement.
    pub area_count: usize,
    /// Session status after the placement.
    pub status: SessionStatus,
}

/// Opaque best-score store.
///
/// The engine reads the current best and records a finished score; the
/// backing storage (file, browser storage, nothing) is the driver's
/// business.
pub trait BestScoreStore {
    /// Current best score.
    fn best(&self) -> u32;

    /// Record a score; returns true iff it set a new best.
    fn record(&mut self, score: u32) -> bool;
}

/// In-memory best-score store, for tests and stateless drivers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryBestScore {
    best: u32,
}

impl BestScoreStore for MemoryBestScore {
    fn best(&self) -> u32 {
        self.best
    }

    fn record(&mut self, score: u32) -> bool {
        if score > self.best {
            self.best = score;
            true
        } else {
            false
        }
    }
}

/// A play session: board, hand, score, and the state machine.
///
/// ## Example
///
/// ```
/// use nexel_core::session::{GameSession, SessionStatus};
/// use nexel_core::solver::Strategy;
///
/// let mut session = GameSession::new(42);
/// assert_eq!(session.status(), SessionStatus::Playing);
///
/// // One automated move.
/// let mv = session.step_with(Strategy::Hybrid).unwrap();
/// assert!(session.board().get(mv.row, mv.col) || session.score() > 0);
/// ```
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    hand: Hand,
    catalog: ShapeCatalog,
    score: u32,
    move_count: u32,
    status: SessionStatus,
    history: Vector<MoveRecord>,
    rng: GameRng,
    ids: ShapeIdSource,
    next_batch: u64,
}

impl GameSession {
    /// Start a session with the standard shape catalog.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_catalog(ShapeCatalog::standard(), seed)
    }

    /// Start a session with a custom catalog.
    #[must_use]
    pub fn with_catalog(catalog: ShapeCatalog, seed: u64) -> Self {
        let mut session = Self {
            board: Board::empty(),
            hand: Hand::new(),
            catalog,
            score: 0,
            move_count: 0,
            status: SessionStatus::Playing,
            history: Vector::new(),
            rng: GameRng::new(seed),
            ids: ShapeIdSource::new(),
            next_batch: 0,
        };
        session.deal_new_hand();
        session.refresh_after_change();
        session
    }

    // === Accessors ===

    /// The authoritative board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The current hand.
    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// The shape catalog this session deals from.
    #[must_use]
    pub fn catalog(&self) -> &ShapeCatalog {
        &self.catalog
    }

    /// Running score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Number of moves applied since the last reset.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Applied moves since the last reset, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    // === Placement pipeline ===

    /// Speculative preview: the board and completed areas that placing the
    /// shape at (row, col) would produce, without touching the session.
    ///
    /// `None` when the shape is not in hand or the placement is illegal.
    /// Drivers use this for hover highlights alongside the authoritative
    /// board.
    #[must_use]
    pub fn preview(&self, shape: ShapeId, row: usize, col: usize) -> Option<(Board, CompletedAreas)> {
        let shape = self.hand.get(shape)?;
        if !self.board.can_place(shape.cells(), row, col) {
            return None;
        }
        let placed = self.board.place(shape.cells(), row, col);
        let completed = find_completed_areas(&placed);
        Some((placed, completed))
    }

    /// Apply a placement: place, detect completions, clear, score, update
    /// the hand, and advance the state machine.
    ///
    /// Contract violations panic: the session must be `Playing`, the shape
    /// must be in hand, and `can_place` must hold.
    pub fn place(&mut self, shape: ShapeId, row: usize, col: usize) -> PlacementOutcome {
        assert_eq!(
            self.status,
            SessionStatus::Playing,
            "placement on a terminal session; reset first"
        );
        let shape = self
            .hand
            .take(shape)
            .unwrap_or_else(|| panic!("shape {shape} is not in the hand"));
        assert!(
            self.board.can_place(shape.cells(), row, col),
            "placement violates the can_place precondition"
        );

        let placed = self.board.place(shape.cells(), row, col);
        let completed = find_completed_areas(&placed);
        let area_count = completed.area_count();

        let (next_board, cleared_count) = if area_count > 0 {
            clear(&placed, &completed)
        } else {
            (placed, 0)
        };
        let points = if area_count > 0 {
            score(cleared_count, &completed)
        } else {
            0
        };

        self.board = next_board;
        self.score += points;
        self.move_count += 1;
        self.history.push_back(MoveRecord {
            shape: shape.id,
            template: shape.template,
            row,
            col,
            points,
            cleared: (area_count > 0).then(|| completed),
            cleared_count,
            score_after: self.score,
        });

        if self.board.is_empty() {
            // Won. The hand is retired; nothing further can be placed.
            self.status = SessionStatus::Won;
            self.hand = Hand::new();
            return PlacementOutcome {
                points,
                cleared_count,
                area_count,
                status: self.status,
            };
        }

        if self.hand.is_empty() {
            self.deal_new_hand();
        }
        self.refresh_after_change();

        PlacementOutcome {
            points,
            cleared_count,
            area_count,
            status: self.status,
        }
    }

    /// Run one automated move with the given strategy.
    ///
    /// Returns the move applied, or `None` when the session is (or becomes)
    /// terminal.
    pub fn step_with(&mut self, strategy: Strategy) -> Option<Move> {
        if self.status != SessionStatus::Playing {
            return None;
        }

        let Some(mv) = strategy.choose(&self.board, self.hand.shapes()) else {
            self.status = SessionStatus::NoMoves;
            return None;
        };

        self.place(mv.shape, mv.row, mv.col);
        Some(mv)
    }

    /// Record this session's score against a best-score store.
    ///
    /// Returns true iff it set a new best.
    pub fn record_best(&self, store: &mut dyn BestScoreStore) -> bool {
        store.record(self.score)
    }

    /// Explicit external reset: fresh board and hand, back to `Playing`.
    ///
    /// The RNG and id source carry on, so resets never replay the previous
    /// deal.
    pub fn reset(&mut self) {
        self.board = Board::empty();
        self.hand = Hand::new();
        self.score = 0;
        self.move_count = 0;
        self.status = SessionStatus::Playing;
        self.history = Vector::new();
        self.deal_new_hand();
        self.refresh_after_change();
    }

    /// Fork an independent copy for speculative play.
    ///
    /// The fork shares nothing with the original: it gets a forked RNG, so
    /// its future deals diverge deterministically.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self {
            board: self.board,
            hand: self.hand.clone(),
            catalog: self.catalog.clone(),
            score: self.score,
            move_count: self.move_count,
            status: self.status,
            history: self.history.clone(),
            rng: self.rng.fork(),
            ids: self.ids.clone(),
            next_batch: self.next_batch,
        }
    }

    // === Internals ===

    fn deal_new_hand(&mut self) {
        let batch = SpawnBatch::new(self.next_batch);
        self.next_batch += 1;
        let shapes = self
            .catalog
            .draw_random(HAND_SIZE, &mut self.rng, &mut self.ids, batch);
        self.hand.deal(shapes);
    }

    /// Recompute derived hand state and the no-moves condition after any
    /// board or hand change.
    fn refresh_after_change(&mut self) {
        self.hand.refresh_disabled(&self.board);
        if self.status == SessionStatus::Playing
            && !has_any_valid_placement(&self.board, self.hand.shapes())
        {
            self.status = SessionStatus::NoMoves;
        }
    }
}
