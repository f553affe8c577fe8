//! The idle-hint controller.
//!
//! When the player does nothing for a while, the first still-movable
//! card (in creation order) gets a pulsing glow so the game never looks
//! stuck. The controller only observes game state and emits scene
//! effects; it never mutates cards or piles.
//!
//! Any active touch suppresses the hint and zeroes the timer - checked
//! every tick, regardless of how far the timer has counted.

use serde::{Deserialize, Serialize};

use crate::cards::CardArena;
use crate::core::entity::CardId;
use crate::scene::{SceneEffect, SceneNode};

/// Idle timer plus highlight state.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct HintController {
    idle_time: f32,
    visible: bool,
    target: Option<CardId>,
}

impl HintController {
    /// Create a controller with the timer at zero and the glow hidden.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Is the glow currently shown?
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The card currently highlighted, if any.
    #[must_use]
    pub fn target(&self) -> Option<CardId> {
        self.target
    }

    /// Seconds since the last touch.
    #[must_use]
    pub fn idle_time(&self) -> f32 {
        self.idle_time
    }

    /// Per-frame tick.
    ///
    /// `touch_active` is the input collaborator's "any pointer down
    /// right now" query. `hint_delay` is the inactivity threshold.
    /// Emitted effects show, place, and raise the glow (and raise the
    /// hinted card); hiding emits only when the glow was visible.
    pub fn update(
        &mut self,
        dt: f32,
        touch_active: bool,
        hint_delay: f32,
        arena: &CardArena,
        effects: &mut Vec<SceneEffect>,
    ) {
        self.idle_time += dt;

        if touch_active {
            self.idle_time = 0.0;
            if self.visible {
                effects.push(SceneEffect::HintVisible(false));
            }
            self.visible = false;
            self.target = None;
            return;
        }

        if self.idle_time <= hint_delay || self.visible {
            return;
        }

        // First draggable card in creation order, if the game isn't done.
        let Some(card) = arena.iter().find(|c| c.draggable) else {
            return;
        };

        self.visible = true;
        self.target = Some(card.id);
        effects.push(SceneEffect::HintVisible(true));
        effects.push(SceneEffect::CenterHint {
            on: card.rect.center(),
        });
        effects.push(SceneEffect::Raise {
            node: SceneNode::Hint,
        });
        effects.push(SceneEffect::Raise {
            node: SceneNode::Card(card.id),
        });
    }
}
