//! The assembled game: screen session, keys, host requests.

pub mod screen;

pub use screen::{GameScreen, Key, ScreenRequest};
