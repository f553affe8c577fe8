//! Core types: identifiers, geometry, configuration, RNG.
//!
//! These are the building blocks the rest of the crate assembles:
//! nothing here knows about placement rules or drag handling.

pub mod config;
pub mod entity;
pub mod geom;
pub mod rng;

pub use config::GameConfig;
pub use entity::{CardId, PileId};
pub use geom::{Rect, Vec2};
pub use rng::GameRng;
