//! Identifiers for cards and piles.
//!
//! Cards live in a single creation-ordered arena; `CardId` is the card's
//! index into it. Piles live in the screen's pile list; `PileId` is the
//! pile's index there. Both are allocated once at setup and never reused.
//!
//! ## Usage
//!
//! ```
//! use card_pickup::core::CardId;
//!
//! let first = CardId::new(0);
//! assert_eq!(first.raw(), 0);
//! assert_eq!(format!("{first}"), "Card(0)");
//! ```

use serde::{Deserialize, Serialize};

/// Identifier for a card in the arena.
///
/// Ids follow creation order: `CardId(0)` is the first card dealt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Index into the arena's card vector.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Identifier for a foundation pile.
///
/// Piles are created left-to-right at setup; the tie-break order for
/// placement tests is exactly this creation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PileId(pub u16);

impl PileId {
    /// Create a pile ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Index into the screen's pile vector.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pile({})", self.0)
    }
}
