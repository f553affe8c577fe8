//! The seam between the core and the rendering collaborator.
//!
//! At setup the host builds its scene graph from game state (card and
//! pile rects, textures by `Card::texture_name`), stacking cards so
//! later-created cards render underneath. After that, every
//! visual change the core decides on is emitted as a [`SceneEffect`]:
//! instant moves, tweened snaps, raises, and hint visibility. The core
//! keeps its own logical copy of positions in `Card::rect`, so effects
//! are presentation only and nothing awaits them.

pub mod effect;

pub use effect::{SceneEffect, SceneNode};
