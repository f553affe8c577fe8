//! Game rules: the pure placement evaluator.

pub mod placement;

pub use placement::{can_place, snap_target};
