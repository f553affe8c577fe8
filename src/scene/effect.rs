//! Declarative scene requests.
//!
//! The core never talks to the renderer directly. Rule decisions produce
//! `SceneEffect`s - fire-and-forget requests the host applies to the
//! actual scene graph. The core does not await animation completion:
//! game state (pile membership, draggability, logical positions) always
//! mutates synchronously before the effect is emitted.

use serde::{Deserialize, Serialize};

use crate::core::entity::CardId;
use crate::core::geom::Vec2;

/// A node in the host scene graph the core can address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SceneNode {
    /// A card actor.
    Card(CardId),
    /// The pulsing hint glow.
    Hint,
}

/// An atomic request to the rendering collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum SceneEffect {
    /// Tween a card to `to` (bottom-left corner) over `duration` seconds.
    /// Non-blocking; runs out-of-band in the renderer.
    Animate {
        card: CardId,
        to: Vec2,
        duration: f32,
    },

    /// Move a node instantly, no tween.
    Warp { node: SceneNode, to: Vec2 },

    /// Raise a node to the topmost render layer.
    Raise { node: SceneNode },

    /// Show or hide the hint glow.
    HintVisible(bool),

    /// Center the hint glow on a stage-space point.
    CenterHint { on: Vec2 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization() {
        let effect = SceneEffect::Animate {
            card: CardId::new(7),
            to: Vec2::new(90.0, 420.0),
            duration: 0.5,
        };

        let json = serde_json::to_string(&effect).unwrap();
        let deserialized: SceneEffect = serde_json::from_str(&json).unwrap();
        assert_eq!(effect, deserialized);
    }
}
