//! The placement rule evaluator.
//!
//! Pure decisions only: no state is mutated here. A card may join a pile
//! when all three hold:
//!
//! 1. the card's region overlaps the pile's region,
//! 2. the card's suit equals the pile's top card's suit,
//! 3. the card's rank ordinal is exactly one above the top card's.
//!
//! An empty pile never matches: foundations are seeded with Aces at
//! setup, and the drag path deliberately has no place-onto-empty rule.

use crate::board::Pile;
use crate::cards::{Card, CardArena};
use crate::core::geom::Vec2;

/// Can `card` legally join `pile` where it currently lies?
#[must_use]
pub fn can_place(card: &Card, pile: &Pile, arena: &CardArena) -> bool {
    if !card.rect.overlaps(&pile.rect) {
        return false;
    }

    let (Some(top_suit), Some(top_ordinal)) =
        (pile.top_suit(arena), pile.top_rank_ordinal(arena))
    else {
        return false;
    };

    card.suit() == top_suit && card.rank_ordinal() == top_ordinal + 1
}

/// Destination for a snap onto `pile`: the position that aligns the
/// card's origin with the pile's origin.
#[must_use]
pub fn snap_target(card: &Card, pile: &Pile) -> Vec2 {
    pile.rect.pos + pile.origin - card.origin
}
