//! Game configuration.
//!
//! The screen is configured at startup by a `GameConfig`; the defaults
//! reproduce the original board layout. The core never hardcodes board
//! geometry - everything it needs comes from here.

use serde::{Deserialize, Serialize};

use super::geom::Vec2;

/// Board, timing, and window configuration.
///
/// Distances are stage units (pixels at 1:1 zoom), durations are seconds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Game-world width. Cards are clamped to stay inside.
    pub world_width: f32,
    /// Game-world height.
    pub world_height: f32,

    /// Card actor size.
    pub card_size: Vec2,
    /// Pile actor size.
    pub pile_size: Vec2,

    /// Bottom-left corner of the leftmost pile.
    pub first_pile_pos: Vec2,
    /// Horizontal spacing between pile corners.
    pub pile_spacing: f32,
    /// Number of foundation piles.
    pub pile_count: u16,

    /// Scatter region for the initial deal: cards land uniformly in
    /// `[0, scatter_max.x] x [0, scatter_max.y]`.
    pub scatter_max: Vec2,

    /// Duration of the snap / return animation.
    pub snap_duration: f32,
    /// Seconds of inactivity before the hint glow appears.
    pub hint_delay: f32,
    /// Hint glow size as a multiple of the card size.
    pub hint_scale: f32,

    /// Window title, handed to the application shell.
    pub window_title: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_width: 800.0,
            world_height: 600.0,
            card_size: Vec2::new(80.0, 100.0),
            pile_size: Vec2::new(120.0, 140.0),
            first_pile_pos: Vec2::new(70.0, 400.0),
            pile_spacing: 180.0,
            pile_count: 4,
            scatter_max: Vec2::new(720.0, 200.0),
            snap_duration: 0.5,
            hint_delay: 3.0,
            hint_scale: 1.5,
            window_title: "52 Card Pickup".to_string(),
        }
    }
}

impl GameConfig {
    /// Bottom-left corner of pile `n`, counting from the left.
    #[must_use]
    pub fn pile_pos(&self, n: u16) -> Vec2 {
        Vec2::new(
            self.first_pile_pos.x + self.pile_spacing * f32::from(n),
            self.first_pile_pos.y,
        )
    }
}
