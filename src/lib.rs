//! # card-pickup
//!
//! Core logic for "52 Card Pickup": a single-player card-matching game
//! where 52 scattered cards are dragged onto four foundation piles in
//! strict rank sequence per suit.
//!
//! ## Design Principles
//!
//! 1. **Rules, not rendering**: the crate decides placement, snapping,
//!    clamping, and hinting. Drawing, tweening, and hit-testing belong
//!    to the host, reached only through declarative [`SceneEffect`]s.
//!
//! 2. **Single-threaded, event-driven**: the host calls pointer and key
//!    callbacks plus one per-frame update, strictly sequentially. No
//!    locks, no ambient globals - all state lives in one [`GameScreen`].
//!
//! 3. **Behavior is data, not closures**: one stateless drag module is
//!    dispatched by card id; piles hold non-owning ids into a single
//!    card arena, so nothing back-references anything.
//!
//! ## Modules
//!
//! - `core`: card/pile ids, 2D geometry, configuration, seeded RNG
//! - `cards`: ranks, suits, card state, and the owning arena
//! - `board`: foundation piles
//! - `scene`: the effect seam to the rendering collaborator
//! - `rules`: the pure placement evaluator
//! - `drag`: the pointer-driven drag state machine
//! - `hint`: the idle-hint controller
//! - `game`: the screen that ties it all together

pub mod board;
pub mod cards;
pub mod core;
pub mod drag;
pub mod game;
pub mod hint;
pub mod rules;
pub mod scene;

// Re-export commonly used types
pub use crate::core::{CardId, GameConfig, GameRng, PileId, Rect, Vec2};

pub use crate::cards::{rank_ordinal, Card, CardArena, DragAnchor, Rank, Suit, INVALID_ORDINAL};

pub use crate::board::Pile;

pub use crate::scene::{SceneEffect, SceneNode};

pub use crate::rules::{can_place, snap_target};

pub use crate::drag::{DragPhase, ReleaseOutcome};

pub use crate::hint::HintController;

pub use crate::game::{GameScreen, Key, ScreenRequest};
