//! Card system: ranks, suits, card state, and the owning arena.
//!
//! ## Key Types
//!
//! - `Rank` / `Suit`: closed enums over the standard deck
//! - `Card`: identity plus mutable drag state and mirrored geometry
//! - `DragAnchor`: transient grab-point record, live only mid-drag
//! - `CardArena`: creation-ordered owner of all 52 cards

pub mod arena;
pub mod card;

pub use arena::CardArena;
pub use card::{rank_ordinal, Card, DragAnchor, Rank, Suit, INVALID_ORDINAL};
