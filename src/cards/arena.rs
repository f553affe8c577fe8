//! Card arena: the single owner of every card in the game.
//!
//! The arena hands out `CardId`s in creation order and everything else
//! (piles, drag machine, hint controller) refers to cards by id. Piles
//! never own cards; they hold ids into this arena.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, Suit};
use crate::core::entity::CardId;
use crate::core::geom::Vec2;

/// Creation-ordered store of all cards.
///
/// ## Example
///
/// ```
/// use card_pickup::cards::{CardArena, Rank, Suit};
/// use card_pickup::core::Vec2;
///
/// let arena = CardArena::full_deck(Vec2::new(80.0, 100.0));
/// assert_eq!(arena.len(), 52);
///
/// let ace = arena.find(Rank::Ace, Suit::Hearts).unwrap();
/// assert_eq!(arena.get(ace).rank(), Rank::Ace);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CardArena {
    cards: Vec<Card>,
    #[serde(skip)]
    by_identity: FxHashMap<(Rank, Suit), CardId>,
}

impl CardArena {
    /// Create an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the full 52-card deck, rank-major then suit, all cards
    /// sized `card_size` with centered origins at the stage origin.
    ///
    /// This is the fixed creation order the hint scan and the placement
    /// tie-break rely on: A of Clubs, A of Hearts, .., K of Diamonds.
    #[must_use]
    pub fn full_deck(card_size: Vec2) -> Self {
        let mut arena = Self::new();
        for rank in Rank::ALL {
            for suit in Suit::ALL {
                arena.alloc(rank, suit, card_size);
            }
        }
        arena
    }

    /// Allocate a card with the next id in creation order.
    pub fn alloc(&mut self, rank: Rank, suit: Suit, size: Vec2) -> CardId {
        let id = CardId::new(self.cards.len() as u32);
        self.cards.push(Card::new(id, rank, suit, size));
        self.by_identity.insert((rank, suit), id);
        id
    }

    /// Get a card by id.
    ///
    /// Panics if the id was not allocated by this arena.
    #[must_use]
    pub fn get(&self, id: CardId) -> &Card {
        &self.cards[id.index()]
    }

    /// Get a card mutably by id.
    ///
    /// Panics if the id was not allocated by this arena.
    #[must_use]
    pub fn get_mut(&mut self, id: CardId) -> &mut Card {
        &mut self.cards[id.index()]
    }

    /// Look up a card by identity.
    #[must_use]
    pub fn find(&self, rank: Rank, suit: Suit) -> Option<CardId> {
        self.by_identity.get(&(rank, suit)).copied()
    }

    /// Number of cards in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the arena is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over cards in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Iterate mutably in creation order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Card> {
        self.cards.iter_mut()
    }

    /// Ids in creation order.
    pub fn ids(&self) -> impl Iterator<Item = CardId> + '_ {
        self.cards.iter().map(|c| c.id)
    }

    /// Rebuild the identity index after deserialization.
    pub fn reindex(&mut self) {
        self.by_identity = self
            .cards
            .iter()
            .map(|c| ((c.rank(), c.suit()), c.id))
            .collect();
    }
}
