//! The drag state machine.
//!
//! One stateless module handles dragging for every card, dispatched by
//! card id from the host's input layer (which does the hit-testing and
//! delivers events in both card-local and stage coordinates). Per-card
//! drag state is data on the card itself: a card is **dragging** while
//! its [`DragAnchor`](crate::cards::DragAnchor) is set, **idle**
//! otherwise. The settling glide after a release is presentation only -
//! the renderer runs the tween and the core never observes it finish,
//! because all state (pile membership, draggability, logical position)
//! mutates synchronously at release time.
//!
//! Release resolution, in order:
//!
//! 1. Piles are tested in creation order; the first rank/suit match
//!    takes the card (no further piles are tried).
//! 2. Overlapping at least one pile without matching any schedules an
//!    animated return to the pre-drag position.
//! 3. Overlapping nothing keeps the release position, clamped so the
//!    card lies fully inside the game world. No animation.

use serde::{Deserialize, Serialize};

use crate::board::Pile;
use crate::cards::{CardArena, DragAnchor};
use crate::core::config::GameConfig;
use crate::core::entity::{CardId, PileId};
use crate::core::geom::Vec2;
use crate::rules;
use crate::scene::{SceneEffect, SceneNode};

/// Observable drag phase of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragPhase {
    /// At rest. A drag may start iff the card is draggable.
    Idle,
    /// Pointer down, card following the pointer.
    Dragging,
}

/// How a release resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReleaseOutcome {
    /// First matching pile took the card; snap animation scheduled.
    Placed(PileId),
    /// Overlapped a pile but matched none; animating back to origin.
    Returned,
    /// Overlapped nothing; position kept, clamped into the world.
    Dropped,
}

/// Current phase of a card.
#[must_use]
pub fn phase(arena: &CardArena, card: CardId) -> DragPhase {
    if arena.get(card).anchor.is_some() {
        DragPhase::Dragging
    } else {
        DragPhase::Idle
    }
}

/// Pointer-down on a card.
///
/// Returns `true` if the event was consumed. A non-draggable card
/// returns `false` so underlying scene layers can process the touch.
///
/// `local` is the touch point relative to the card's corner, `stage`
/// the same point in stage space; both are recorded as the grab anchor.
/// The card raises to the top render layer for the duration of the drag.
pub fn pointer_down(
    arena: &mut CardArena,
    card_id: CardId,
    local: Vec2,
    stage: Vec2,
    effects: &mut Vec<SceneEffect>,
) -> bool {
    let card = arena.get_mut(card_id);
    if !card.draggable {
        return false;
    }

    card.anchor = Some(DragAnchor {
        grab_offset: local,
        pointer_down: stage,
    });

    effects.push(SceneEffect::Raise {
        node: SceneNode::Card(card_id),
    });
    true
}

/// Pointer moved while down.
///
/// The card translates 1:1 with the pointer, offset by the grab point.
/// Ignored when the card is not mid-drag.
pub fn pointer_move(
    arena: &mut CardArena,
    card_id: CardId,
    local: Vec2,
    effects: &mut Vec<SceneEffect>,
) {
    let card = arena.get_mut(card_id);
    let Some(anchor) = card.anchor else {
        return;
    };

    card.rect.pos = card.rect.pos + (local - anchor.grab_offset);
    effects.push(SceneEffect::Warp {
        node: SceneNode::Card(card_id),
        to: card.rect.pos,
    });
}

/// Pointer released.
///
/// Resolves placement against every pile and returns how the release
/// settled, or `None` if the card was not mid-drag. Pile membership and
/// card state mutate before this returns; scheduled animations are
/// fire-and-forget.
pub fn pointer_up(
    arena: &mut CardArena,
    piles: &mut [Pile],
    card_id: CardId,
    config: &GameConfig,
    effects: &mut Vec<SceneEffect>,
) -> Option<ReleaseOutcome> {
    let anchor = arena.get_mut(card_id).anchor.take()?;

    let mut over_pile = false;
    for pile in piles.iter_mut() {
        let card = arena.get(card_id);
        if !card.rect.overlaps(&pile.rect) {
            continue;
        }
        over_pile = true;

        if rules::can_place(card, pile, arena) {
            let target = rules::snap_target(card, pile);
            let card = arena.get_mut(card_id);
            card.draggable = false;
            card.rect.pos = target;
            effects.push(SceneEffect::Animate {
                card: card_id,
                to: target,
                duration: config.snap_duration,
            });
            pile.add_card(card_id);
            return Some(ReleaseOutcome::Placed(pile.id));
        }
    }

    if over_pile {
        // Wrong pile: glide back to where the drag started.
        let target = anchor.rest_pos();
        arena.get_mut(card_id).rect.pos = target;
        effects.push(SceneEffect::Animate {
            card: card_id,
            to: target,
            duration: config.snap_duration,
        });
        return Some(ReleaseOutcome::Returned);
    }

    let card = arena.get_mut(card_id);
    card.rect.pos = card
        .rect
        .clamped_within(config.world_width, config.world_height);
    effects.push(SceneEffect::Warp {
        node: SceneNode::Card(card_id),
        to: card.rect.pos,
    });
    Some(ReleaseOutcome::Dropped)
}
