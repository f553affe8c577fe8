//! Card identity and runtime state.
//!
//! `Rank` and `Suit` are closed enums over the standard 52-card deck.
//! Rank ordering is ordinal: Ace lowest (0) through King (12); a pile
//! accepts a card exactly one ordinal above its top card.
//!
//! Symbols are the strings the asset pipeline uses ("A", "2", .., "K" and
//! the capitalized suit names). Parsing an unknown rank symbol yields the
//! sentinel ordinal -1, which can never satisfy a placement check.

use serde::{Deserialize, Serialize};

use crate::core::entity::CardId;
use crate::core::geom::{Rect, Vec2};

/// Sentinel ordinal for an unrecognized rank symbol.
///
/// `-1` never equals `top_ordinal + 1` for any valid top card, so a bad
/// symbol safely behaves as "never matches" rather than corrupting state.
pub const INVALID_ORDINAL: i32 = -1;

/// The thirteen ranks, ordinal order (Ace low).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Ace = 0,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks in ordinal order.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Position in the fixed {A,2,..,10,J,Q,K} ordering, 0..=12.
    #[must_use]
    pub const fn ordinal(self) -> i32 {
        self as i32
    }

    /// The asset/display symbol for this rank.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    /// Parse a rank symbol. `None` for anything outside the 13 symbols.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Rank> {
        Rank::ALL.iter().copied().find(|r| r.symbol() == symbol)
    }
}

/// Ordinal of a rank symbol, [`INVALID_ORDINAL`] if unrecognized.
#[must_use]
pub fn rank_ordinal(symbol: &str) -> i32 {
    Rank::from_symbol(symbol).map_or(INVALID_ORDINAL, Rank::ordinal)
}

/// The four suits, creation order of the original deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    Clubs = 0,
    Hearts,
    Spades,
    Diamonds,
}

impl Suit {
    /// All suits in deck creation order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Hearts, Suit::Spades, Suit::Diamonds];

    /// The asset/display symbol for this suit.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Suit::Clubs => "Clubs",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
            Suit::Diamonds => "Diamonds",
        }
    }

    /// Parse a suit symbol.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Suit> {
        Suit::ALL.iter().copied().find(|s| s.symbol() == symbol)
    }
}

/// Transient drag anchor, present only while a drag is live.
///
/// `grab_offset` is the touch point in card-local space; `pointer_down`
/// is the same touch point in stage space. The card's pre-drag resting
/// position is recovered as `pointer_down - grab_offset`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DragAnchor {
    /// Touch point relative to the card's bottom-left corner.
    pub grab_offset: Vec2,
    /// Touch point in stage space at drag start.
    pub pointer_down: Vec2,
}

impl DragAnchor {
    /// The card's bottom-left corner at the moment the drag started.
    #[must_use]
    pub fn rest_pos(&self) -> Vec2 {
        self.pointer_down - self.grab_offset
    }
}

/// A card on the board.
///
/// Rank and suit are fixed at construction. `draggable` starts true and
/// is cleared permanently when the card lands on a pile. `rect`/`origin`
/// mirror the scene actor's geometry: the core reads them for overlap
/// tests and writes them when it moves the card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Arena id, creation order.
    pub id: CardId,

    rank: Rank,
    suit: Suit,

    /// Can the player still pick this card up?
    pub draggable: bool,

    /// Set on pointer-down, cleared when the drag resolves.
    pub anchor: Option<DragAnchor>,

    /// Actor footprint in stage space.
    pub rect: Rect,

    /// Rotation/scale anchor, relative to the bottom-left corner.
    /// Centered by construction.
    pub origin: Vec2,
}

impl Card {
    /// Create a card with a centered origin and the given footprint size.
    ///
    /// Position starts at the stage origin; setup moves it afterwards.
    #[must_use]
    pub fn new(id: CardId, rank: Rank, suit: Suit, size: Vec2) -> Self {
        Self {
            id,
            rank,
            suit,
            draggable: true,
            anchor: None,
            rect: Rect {
                pos: Vec2::default(),
                size,
            },
            origin: Vec2::new(size.x / 2.0, size.y / 2.0),
        }
    }

    /// The card's rank.
    #[must_use]
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// The card's suit.
    #[must_use]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Rank position in the fixed 13-symbol ordering.
    #[must_use]
    pub fn rank_ordinal(&self) -> i32 {
        self.rank.ordinal()
    }

    /// Asset file stem for this card, e.g. `cardHeartsA`.
    #[must_use]
    pub fn texture_name(&self) -> String {
        format!("card{}{}", self.suit.symbol(), self.rank.symbol())
    }
}
