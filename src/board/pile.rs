//! Foundation piles.
//!
//! A pile is an append-only stack of card ids at a fixed board position.
//! Only the top card's identity is observable; querying rank or suit on
//! an empty pile is impossible by construction (the accessors return
//! `Option` and resolve through the arena).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{CardArena, Rank, Suit};
use crate::core::entity::{CardId, PileId};
use crate::core::geom::{Rect, Vec2};

/// A foundation pile.
///
/// The pile does not own cards; `cards` holds ids into the arena in the
/// order they were placed. Membership only ever grows: cards are never
/// removed once added.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pile {
    /// Creation-order id; also the placement tie-break order.
    pub id: PileId,

    /// Actor footprint in stage space. Fixed after setup.
    pub rect: Rect,

    /// Rotation/scale anchor relative to the bottom-left corner.
    /// Centered by construction.
    pub origin: Vec2,

    /// One suit has at most 13 cards, so the stack never spills.
    cards: SmallVec<[CardId; 13]>,
}

impl Pile {
    /// Create an empty pile with a centered origin.
    #[must_use]
    pub fn new(id: PileId, pos: Vec2, size: Vec2) -> Self {
        Self {
            id,
            rect: Rect { pos, size },
            origin: Vec2::new(size.x / 2.0, size.y / 2.0),
            cards: SmallVec::new(),
        }
    }

    /// Check if no card has been placed here yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards stacked here.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.cards.len()
    }

    /// Append a card to the stack.
    ///
    /// No validation happens here: legality is the placement evaluator's
    /// job, and this call is the single mutation point for membership.
    pub fn add_card(&mut self, card: CardId) {
        self.cards.push(card);
    }

    /// The most recently placed card, `None` while empty.
    #[must_use]
    pub fn top_card(&self) -> Option<CardId> {
        self.cards.last().copied()
    }

    /// Rank of the top card.
    #[must_use]
    pub fn top_rank(&self, arena: &CardArena) -> Option<Rank> {
        self.top_card().map(|id| arena.get(id).rank())
    }

    /// Suit of the top card.
    #[must_use]
    pub fn top_suit(&self, arena: &CardArena) -> Option<Suit> {
        self.top_card().map(|id| arena.get(id).suit())
    }

    /// Rank ordinal of the top card.
    #[must_use]
    pub fn top_rank_ordinal(&self, arena: &CardArena) -> Option<i32> {
        self.top_rank(arena).map(Rank::ordinal)
    }

    /// Cards in placement order, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }
}
